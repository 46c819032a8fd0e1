//! Mock struct, constructor, mocked method bodies, and stub registration.

use std::io::Write;

use julep_ir::{Interface, Method};

use crate::naming::{call_name, constructor_name, mock_name, type_params_decl, type_params_use};
use crate::signature::{well_known_accessor, SignatureModel};
use crate::{CodeWriter, TypeRenderer};

/// Emits the mock side of one interface: the struct and constructor, one
/// mocked method per interface method, and the typed/raw `On` registration
/// entry points that hand out call wrappers.
pub(crate) struct MockEmitter<'a> {
    iface: &'a Interface,
    renderer: &'a TypeRenderer<'a>,
    elided: &'a str,
}

impl<'a> MockEmitter<'a> {
    pub(crate) fn new(iface: &'a Interface, renderer: &'a TypeRenderer<'a>, elided: &'a str) -> Self {
        Self {
            iface,
            renderer,
            elided,
        }
    }

    fn model(&self, method: &'a Method) -> SignatureModel<'a> {
        SignatureModel::new(&method.signature, self.renderer, self.elided)
    }

    /// Mock struct declaration and constructor.
    pub(crate) fn emit_base<W: Write>(&self, w: &mut CodeWriter<W>) {
        let mock = mock_name(self.iface);
        let ctor = constructor_name(self.iface);
        let decl = type_params_decl(&self.iface.type_params);
        let tp = type_params_use(&self.iface.type_params);

        w.blank();
        w.line(&format!("// {} mock of {}.", mock, self.iface.name));
        w.line(&format!("type {}{} struct {{ mock.Mock }}", mock, decl));

        w.blank();
        w.line(&format!("// {} creates a new {}.", ctor, mock));
        w.line(&format!(
            "func {}{}(tb testing.TB) *{}{} {{",
            ctor, decl, mock, tp
        ));
        w.indent();
        w.line("tb.Helper()");
        w.blank();
        w.line(&format!("m := &{}{}{{}}", mock, tp));
        w.line("m.Mock.Test(tb)");
        w.blank();
        w.line("tb.Cleanup(func() { m.AssertExpectations(tb) })");
        w.blank();
        w.line("return m");
        w.dedent();
        w.line("}");
    }

    /// The mocked method body: record the call, detect a function-valued
    /// return, otherwise extract each result by position.
    pub(crate) fn emit_method<W: Write>(&self, w: &mut CodeWriter<W>, method: &'a Method) {
        let mock = mock_name(self.iface);
        let tp = type_params_use(&self.iface.type_params);
        let model = self.model(method);
        let results = &method.signature.results;

        w.blank();
        w.line(&format!(
            "func (_m *{}{}) {}({}){} {{",
            mock,
            tp,
            method.name,
            model.decl_params().join(", "),
            model.results_decl()
        ));
        w.indent();

        let args = model.call_args().join(", ");
        if results.is_empty() {
            w.line(&format!("_m.Called({})", args));
        } else {
            w.line(&format!("_ret := _m.Called({})", args));

            // A registered function-valued return takes priority over the
            // recorded values and is invoked with the live arguments.
            let spread = if method.signature.variadic { "..." } else { "" };
            w.blank();
            w.line(&format!(
                "if _rf, ok := _ret.Get(0).({}); ok {{",
                model.func_signature(true)
            ));
            w.indent();
            w.line(&format!("return _rf({}{})", args, spread));
            w.dedent();
            w.line("}");

            w.blank();
            for (i, name) in model.result_names().iter().enumerate() {
                let rendered = model.result_type(i);
                match well_known_accessor(&rendered) {
                    Some(accessor) => {
                        w.line(&format!("{} := _ret.{}({})", name, accessor, i));
                    }
                    // Best effort: a failed assertion leaves the zero value.
                    None => {
                        w.line(&format!("{}, _ := _ret.Get({}).({})", name, i, rendered));
                    }
                }
            }

            w.blank();
            w.line(&format!("return {}", model.result_names().join(", ")));
        }

        w.dedent();
        w.line("}");
    }

    /// Strongly-typed stub registration: `On<Method>`.
    pub(crate) fn emit_on<W: Write>(&self, w: &mut CodeWriter<W>, method: &'a Method) {
        let model = self.model(method);
        self.emit_registration(w, method, &model.typed_params(), &model.on_args());
    }

    /// Permissive stub registration: `On<Method>Raw`, everything opaque.
    pub(crate) fn emit_on_raw<W: Write>(&self, w: &mut CodeWriter<W>, method: &'a Method) {
        let model = self.model(method);
        self.emit_registration_named(
            w,
            method,
            &format!("On{}Raw", method.name),
            &model.raw_params(),
            &model.on_args(),
        );
    }

    fn emit_registration<W: Write>(
        &self,
        w: &mut CodeWriter<W>,
        method: &'a Method,
        params: &[String],
        args: &[String],
    ) {
        self.emit_registration_named(w, method, &format!("On{}", method.name), params, args);
    }

    fn emit_registration_named<W: Write>(
        &self,
        w: &mut CodeWriter<W>,
        method: &'a Method,
        entry: &str,
        params: &[String],
        args: &[String],
    ) {
        let mock = mock_name(self.iface);
        let call = call_name(self.iface, method);
        let tp = type_params_use(&self.iface.type_params);

        let registration = if args.is_empty() {
            format!("_m.Mock.On(\"{}\")", method.name)
        } else {
            format!("_m.Mock.On(\"{}\", {})", method.name, args.join(", "))
        };

        w.blank();
        w.line(&format!(
            "func (_m *{}{}) {}({}) *{}{} {{",
            mock,
            tp,
            entry,
            params.join(", "),
            call,
            tp
        ));
        w.indent();
        w.line(&format!(
            "return &{}{}{{Call: {}, Parent: _m}}",
            call, tp, registration
        ));
        w.dedent();
        w.line("}");
    }
}
