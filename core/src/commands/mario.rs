use crate::router::CommandTable;

use super::arg_or;

pub fn table() -> CommandTable {
    CommandTable::new("mario")
        .command("mario:jump", |_, args| {
            Ok(format!("Mario jumps to: {}\n🍄 *boing*", arg_or(args, 0, ".")))
        })
        .command("mario:power-up", |state, _| {
            state.valuation.record_character_spawn();
            Ok("🍄 Power-up collected! Performance boost active!\n⚡ Command execution speed doubled!".to_string())
        })
        .command("mario:coin", |_, _| {
            Ok("🪙 Coin collected! Achievement unlocked!\n✨ +100 points".to_string())
        })
        .command("mario:show", |state, _| {
            state.valuation.record_character_spawn();
            Ok("🍄 Mario has entered the terminal!".to_string())
        })
        .command("mario:hide", |_, _| Ok("🍄 Mario has left the terminal".to_string()))
}
