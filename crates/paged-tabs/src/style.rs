//! Built-in style defaults and layered style resolution.
//!
//! Every styleable part of the tab bar is described by a CSS declaration
//! list. Callers override the defaults by passing their own list; layers
//! are resolved left to right and later declarations win per property.

/// Default header strip style.
pub const HEADER: &str = "display: flex; flex-direction: column; justify-content: flex-end; \
     border-bottom: 1px solid #888; background-color: #fff;";

/// Default text marker style.
pub const LABEL: &str = "font-size: 17px; font-weight: 600; color: #000;";

/// Default image marker style.
pub const IMAGE: &str = "height: 30px; width: 30px;";

/// Default underline style.
pub const UNDERLINE: &str = "height: 1px; margin-top: 5px; background-color: #000;";

/// Resolves a stack of CSS declaration lists into one.
///
/// Later layers win on conflicting properties; output order follows the
/// first appearance of each property. Fragments without a `prop: value`
/// shape are skipped.
pub fn resolve(layers: &[&str]) -> String {
    let mut resolved: Vec<(String, String)> = Vec::new();
    for layer in layers {
        for decl in layer.split(';') {
            let Some((prop, value)) = decl.split_once(':') else {
                continue;
            };
            let (prop, value) = (prop.trim(), value.trim());
            if prop.is_empty() || value.is_empty() {
                continue;
            }
            match resolved.iter_mut().find(|(p, _)| p == prop) {
                Some(slot) => slot.1 = value.to_string(),
                None => resolved.push((prop.to_string(), value.to_string())),
            }
        }
    }
    let mut out = String::new();
    for (prop, value) in &resolved {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(prop);
        out.push_str(": ");
        out.push_str(value);
        out.push(';');
    }
    out
}
