//! Fluent call-configuration wrappers for registered stubs.

use std::io::Write;

use julep_ir::{Interface, Method};

use crate::naming::{call_name, mock_name, type_params_decl, type_params_use};
use crate::signature::{param_name, position_letter, well_known_accessor, SignatureModel};
use crate::{CodeWriter, TypeRenderer};

/// Passthrough mutators on the wrapped call record: method name, extra
/// parameters, and the underlying call expression. Each returns the wrapper
/// for chaining.
const FLUENT_METHODS: &[(&str, &str, &str)] = &[
    ("Panic", "msg string", "Panic(msg)"),
    ("Once", "", "Once()"),
    ("Twice", "", "Twice()"),
    ("Times", "i int", "Times(i)"),
    ("WaitUntil", "w <-chan time.Time", "WaitUntil(w)"),
    ("After", "d time.Duration", "After(d)"),
    ("Run", "fn func(args mock.Arguments)", "Run(fn)"),
    ("Maybe", "", "Maybe()"),
];

/// Emits the call-wrapper side of one method: the wrapper type, the fluent
/// passthroughs, the typed configuration methods, and chaining stubs that
/// forward registration for every other method to the parent mock.
pub(crate) struct CallEmitter<'a> {
    iface: &'a Interface,
    renderer: &'a TypeRenderer<'a>,
    elided: &'a str,
}

impl<'a> CallEmitter<'a> {
    pub(crate) fn new(iface: &'a Interface, renderer: &'a TypeRenderer<'a>, elided: &'a str) -> Self {
        Self {
            iface,
            renderer,
            elided,
        }
    }

    pub(crate) fn emit<W: Write>(&self, w: &mut CodeWriter<W>, method: &'a Method) {
        self.emit_base(w, method);
        self.emit_fluent(w, method);
        self.emit_typed_returns(w, method);
        self.emit_returns_fn(w, method);
        self.emit_typed_run(w, method);
        self.emit_chaining(w, method);
    }

    fn model(&self, method: &'a Method) -> SignatureModel<'a> {
        SignatureModel::new(&method.signature, self.renderer, self.elided)
    }

    /// Receiver/return type of the wrapper's own methods.
    fn call_type(&self, method: &Method) -> String {
        format!(
            "{}{}",
            call_name(self.iface, method),
            type_params_use(&self.iface.type_params)
        )
    }

    fn emit_base<W: Write>(&self, w: &mut CodeWriter<W>, method: &'a Method) {
        let decl = type_params_decl(&self.iface.type_params);
        let tp = type_params_use(&self.iface.type_params);

        w.blank();
        w.line(&format!(
            "type {}{} struct {{",
            call_name(self.iface, method),
            decl
        ));
        w.indent();
        w.line("*mock.Call");
        w.line(&format!("Parent *{}{}", mock_name(self.iface), tp));
        w.dedent();
        w.line("}");
    }

    fn emit_fluent<W: Write>(&self, w: &mut CodeWriter<W>, method: &'a Method) {
        let call = self.call_type(method);
        for (name, params, passthrough) in FLUENT_METHODS {
            w.blank();
            w.line(&format!(
                "func (_c *{}) {}({}) *{} {{",
                call, name, params, call
            ));
            w.indent();
            w.line(&format!("_c.Call = _c.Call.{}", passthrough));
            w.line("return _c");
            w.dedent();
            w.line("}");
        }
    }

    /// `TypedReturns`: fully typed positional return values, one binder per
    /// declared result. Absent for methods without results.
    fn emit_typed_returns<W: Write>(&self, w: &mut CodeWriter<W>, method: &'a Method) {
        let model = self.model(method);
        if method.signature.results.is_empty() {
            return;
        }
        let call = self.call_type(method);

        let binders: Vec<String> = (0..method.signature.results.len())
            .map(position_letter)
            .collect();
        let params: Vec<String> = binders
            .iter()
            .enumerate()
            .map(|(i, binder)| format!("{} {}", binder, model.result_type(i)))
            .collect();

        w.blank();
        w.line(&format!(
            "func (_c *{}) TypedReturns({}) *{} {{",
            call,
            params.join(", "),
            call
        ));
        w.indent();
        w.line(&format!("_c.Call = _c.Return({})", binders.join(", ")));
        w.line("return _c");
        w.dedent();
        w.line("}");
    }

    /// `ReturnsFn`: registers a function-valued return the mocked method
    /// body detects and invokes directly. Absent for methods without
    /// results.
    fn emit_returns_fn<W: Write>(&self, w: &mut CodeWriter<W>, method: &'a Method) {
        let model = self.model(method);
        if method.signature.results.is_empty() {
            return;
        }
        let call = self.call_type(method);

        w.blank();
        w.line(&format!(
            "func (_c *{}) ReturnsFn(fn {}) *{} {{",
            call,
            model.func_signature(true),
            call
        ));
        w.indent();
        w.line("_c.Call = _c.Return(fn)");
        w.line("return _c");
        w.dedent();
        w.line("}");
    }

    /// `TypedRun`: a side-effect callback typed per the method's parameters.
    /// Each recorded argument is extracted by position, well-known types
    /// through their typed accessor, everything else by best-effort
    /// assertion, then the callback is invoked (spreading the variadic
    /// tail when present).
    fn emit_typed_run<W: Write>(&self, w: &mut CodeWriter<W>, method: &'a Method) {
        let model = self.model(method);
        let call = self.call_type(method);

        w.blank();
        w.line(&format!(
            "func (_c *{}) TypedRun(fn {}) *{} {{",
            call,
            model.func_signature(false),
            call
        ));
        w.indent();
        w.line("_c.Call = _c.Call.Run(func(args mock.Arguments) {");
        w.indent();

        let mut pos = 0usize;
        let mut binders = Vec::new();
        for (i, param) in method.signature.params.iter().enumerate() {
            if model.is_elided(i) {
                continue;
            }
            let binder = format!("_{}", param_name(param, i));
            let rendered = self.renderer.render(&param.ty, false);
            match well_known_accessor(&rendered) {
                Some(accessor) => {
                    w.line(&format!("{} := args.{}({})", binder, accessor, pos));
                }
                None => {
                    w.line(&format!("{}, _ := args.Get({}).({})", binder, pos, rendered));
                }
            }
            binders.push(binder);
            pos += 1;
        }

        let spread = if method.signature.variadic { "..." } else { "" };
        w.line(&format!("fn({}{})", binders.join(", "), spread));
        w.dedent();
        w.line("})");
        w.line("return _c");
        w.dedent();
        w.line("}");
    }

    /// Chaining stubs: the wrapper for this method re-exposes registration
    /// for every other method, forwarding to the parent mock so stub setup
    /// can chain across methods without re-dereferencing the mock.
    fn emit_chaining<W: Write>(&self, w: &mut CodeWriter<W>, method: &'a Method) {
        let call = self.call_type(method);

        for other in self.others(method) {
            let model = self.model(other);
            let target = self.call_type(other);
            let args = model.call_args();
            let spread = if other.signature.variadic { "..." } else { "" };

            w.blank();
            w.line(&format!(
                "func (_c *{}) On{}({}) *{} {{",
                call,
                other.name,
                model.typed_params().join(", "),
                target
            ));
            w.indent();
            w.line(&format!(
                "return _c.Parent.On{}({}{})",
                other.name,
                args.join(", "),
                spread
            ));
            w.dedent();
            w.line("}");
        }

        for other in self.others(method) {
            let model = self.model(other);
            let target = self.call_type(other);

            w.blank();
            w.line(&format!(
                "func (_c *{}) On{}Raw({}) *{} {{",
                call,
                other.name,
                model.raw_params().join(", "),
                target
            ));
            w.indent();
            w.line(&format!(
                "return _c.Parent.On{}Raw({})",
                other.name,
                model.call_args().join(", ")
            ));
            w.dedent();
            w.line("}");
        }
    }

    fn others(&self, method: &'a Method) -> impl Iterator<Item = &'a Method> {
        let name = method.name.clone();
        self.iface.methods.iter().filter(move |m| m.name != name)
    }
}
