//! The stock command tables, in lookup order.

mod builtin;
mod chemistry;
mod electronics;
mod exec;
mod mario;
mod mongoose;
mod robotics;
mod theme;
mod token;

pub use builtin::{CLEAR_SCREEN, HELP};

use crate::router::TableRegistry;

/// builtin, theme, electronics, chemistry, robotics, mario, token, mongoose, exec.
pub fn default_registry() -> TableRegistry {
    TableRegistry::new()
        .with(builtin::table())
        .with(theme::table())
        .with(electronics::table())
        .with(chemistry::table())
        .with(robotics::table())
        .with(mario::table())
        .with(token::table())
        .with(mongoose::table())
        .with(exec::table())
}

pub(crate) fn arg_or<'a>(args: &'a [String], idx: usize, default: &'a str) -> &'a str {
    args.get(idx).map(String::as_str).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_is_fixed() {
        let registry = default_registry();
        let names: Vec<&str> = registry.tables().iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            [
                "builtin",
                "theme",
                "electronics",
                "chemistry",
                "robotics",
                "mario",
                "token",
                "mongoose",
                "exec"
            ]
        );
    }

    #[test]
    fn interpreter_verbs_are_not_registered() {
        let registry = default_registry();
        for verb in ["python", "node", "run"] {
            assert!(registry.resolve(verb).is_none(), "{verb} should not resolve");
        }
    }
}
