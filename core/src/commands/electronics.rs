use rand::Rng;

use crate::router::CommandTable;

use super::arg_or;

pub fn table() -> CommandTable {
    CommandTable::new("electronics")
        .command("elec:signal", |_, args| {
            let hz = arg_or(args, 0, "440");
            Ok(format!("⚡ Generating {hz}Hz signal...\n📊 Waveform: Sine\n🔊 Amplitude: 1.0V"))
        })
        .command("elec:scope", |_, _| Ok(SCOPE.to_string()))
        .command("elec:build", |state, _| {
            state.valuation.record_character_spawn();
            Ok("⚡ Building circuit...\n🔌 Connecting components...\n🔧 Soldering joints...\n✅ Circuit build complete!".to_string())
        })
        .command("elec:voltage", |state, args| {
            let pin = arg_or(args, 0, "A0");
            let volts: f64 = state.rng.gen_range(0.0..5.0);
            Ok(format!("⚡ Reading voltage from {pin}:\n📊 {volts:.2}V"))
        })
        .command("elec:current", |state, args| {
            let circuit = arg_or(args, 0, "main");
            let amps: f64 = state.rng.gen_range(0.0..2.0);
            Ok(format!("⚡ Measuring current in {circuit}:\n📊 {amps:.3}A"))
        })
}

const SCOPE: &str = "⚡ Oscilloscope Mode Activated

╔════════════════════════════╗
║     ～～～～～～～～～     ║
║   ～         ～         ～  ║
║  ～           ～           ～║
║ ～             ～           ║
╚════════════════════════════╝

📊 Timebase: 1ms/div
📈 Voltage: 1V/div
⚡ Trigger: Rising edge";
