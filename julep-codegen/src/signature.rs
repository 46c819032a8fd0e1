//! Signature modeling: binder names, elision, and synthesized function types.

use julep_ir::{Parameter, ReturnValue, Signature};

use crate::TypeRenderer;

/// Result types with a dedicated typed accessor on the recorded call.
/// Everything else goes through a best-effort type assertion whose failure
/// yields the zero value silently.
pub(crate) fn well_known_accessor(rendered: &str) -> Option<&'static str> {
    match rendered {
        "string" => Some("String"),
        "int" => Some("Int"),
        "bool" => Some("Bool"),
        "error" => Some("Error"),
        _ => None,
    }
}

/// Binder name for a parameter: its declared name, or a fallback synthesized
/// from its position (`aParam`, `bParam`, ...).
pub(crate) fn param_name(param: &Parameter, position: usize) -> String {
    match &param.name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => format!("{}Param", position_letter(position)),
    }
}

/// Binder name for a result: its declared name, or `_r<letter><index>`,
/// unique within one method's result list.
pub(crate) fn result_name(result: &ReturnValue, position: usize) -> String {
    match &result.name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => format!("_r{}{}", position_letter(position), position),
    }
}

/// Single letter for small positions, `p<index>` beyond the alphabet so
/// synthesized binders stay unique.
pub(crate) fn position_letter(position: usize) -> String {
    if position < 26 {
        char::from(b'a' + position as u8).to_string()
    } else {
        format!("p{}", position)
    }
}

/// A method signature paired with the renderer and elision config for the
/// current pass. Every emitter view of a signature (binders, argument
/// lists, synthesized function types) comes from here so they stay
/// positionally consistent with the recorded-call contract.
pub(crate) struct SignatureModel<'a> {
    sig: &'a Signature,
    renderer: &'a TypeRenderer<'a>,
    elided: &'a str,
}

impl<'a> SignatureModel<'a> {
    pub(crate) fn new(sig: &'a Signature, renderer: &'a TypeRenderer<'a>, elided: &'a str) -> Self {
        Self {
            sig,
            renderer,
            elided,
        }
    }

    /// Rendered type of the parameter at `i`, spelled `...T` when it is the
    /// variadic tail.
    pub(crate) fn param_type(&self, i: usize) -> String {
        let tail = self.sig.variadic && i + 1 == self.sig.params.len();
        self.renderer.render(&self.sig.params[i].ty, tail)
    }

    pub(crate) fn result_type(&self, i: usize) -> String {
        self.renderer.render(&self.sig.results[i].ty, false)
    }

    /// True when the parameter's rendered type matches the configured
    /// elided marker (a context carrier by convention).
    pub(crate) fn is_elided(&self, i: usize) -> bool {
        self.renderer.render(&self.sig.params[i].ty, false) == self.elided
    }

    /// Parameter declarations for the mocked method itself: every parameter
    /// appears, elided ones bound to `_`.
    pub(crate) fn decl_params(&self) -> Vec<String> {
        self.sig
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| {
                let binder = if self.is_elided(i) {
                    "_".to_string()
                } else {
                    param_name(param, i)
                };
                format!("{} {}", binder, self.param_type(i))
            })
            .collect()
    }

    /// Typed parameter declarations for registration entry points; elided
    /// parameters are dropped entirely.
    pub(crate) fn typed_params(&self) -> Vec<String> {
        self.each_kept(|model, i| format!("{} {}", param_name(&model.sig.params[i], i), model.param_type(i)))
    }

    /// Opaque parameter declarations for raw registration entry points.
    pub(crate) fn raw_params(&self) -> Vec<String> {
        self.each_kept(|model, i| format!("{} interface{{}}", param_name(&model.sig.params[i], i)))
    }

    /// Names of non-elided parameters, in order. These are the positional
    /// arguments handed to the call recorder.
    pub(crate) fn call_args(&self) -> Vec<String> {
        self.each_kept(|model, i| param_name(&model.sig.params[i], i))
    }

    /// Arguments for stub registration: parameter names, with function-typed
    /// parameters replaced by the recorder's wildcard matcher.
    pub(crate) fn on_args(&self) -> Vec<String> {
        self.each_kept(|model, i| {
            if model.sig.params[i].ty.is_func() {
                "mock.Anything".to_string()
            } else {
                param_name(&model.sig.params[i], i)
            }
        })
    }

    /// Result binder names in declared order.
    pub(crate) fn result_names(&self) -> Vec<String> {
        self.sig
            .results
            .iter()
            .enumerate()
            .map(|(i, result)| result_name(result, i))
            .collect()
    }

    /// Result list as it appears after a method's parameter list: nothing,
    /// one bare type, or a parenthesized tuple.
    pub(crate) fn results_decl(&self) -> String {
        let rendered: Vec<String> = (0..self.sig.results.len())
            .map(|i| self.result_type(i))
            .collect();
        match rendered.len() {
            0 => String::new(),
            1 => format!(" {}", rendered[0]),
            _ => format!(" ({})", rendered.join(", ")),
        }
    }

    /// Synthesized function type matching this signature minus elided
    /// parameters, used for function-valued returns and run callbacks.
    pub(crate) fn func_signature(&self, with_results: bool) -> String {
        let params = self.each_kept(|model, i| model.param_type(i)).join(", ");
        let mut out = format!("func({})", params);
        if with_results && !self.sig.results.is_empty() {
            let results: Vec<String> = (0..self.sig.results.len())
                .map(|i| self.result_type(i))
                .collect();
            out.push_str(&format!(" ({})", results.join(", ")));
        }
        out
    }

    fn each_kept(&self, f: impl Fn(&Self, usize) -> String) -> Vec<String> {
        (0..self.sig.params.len())
            .filter(|&i| !self.is_elided(i))
            .map(|i| f(self, i))
            .collect()
    }
}
