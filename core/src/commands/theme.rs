use crate::router::CommandTable;
use crate::theme::THEMES;

pub fn table() -> CommandTable {
    CommandTable::new("theme")
        .command("theme", |state, args| {
            let Some(name) = args.first() else {
                return Ok(format!(
                    "Current theme: {}\nAvailable: {}",
                    state.theme.current(),
                    THEMES.join(", ")
                ));
            };
            if state.theme.load(name) {
                Ok(format!("Theme switched to: {name}"))
            } else {
                Ok(format!("Theme not found: {name}"))
            }
        })
        .command("theme:next", |state, _| Ok(format!("Theme: {}", state.theme.next())))
        .command("theme:prev", |state, _| Ok(format!("Theme: {}", state.theme.prev())))
        .command("theme:list", |state, _| Ok(state.theme.list()))
}
