use rand::Rng;

use crate::router::CommandTable;

use super::arg_or;

pub fn table() -> CommandTable {
    CommandTable::new("robotics")
        .command("robot:program", |_, args| {
            let program = if args.is_empty() { "default".to_string() } else { args.join(" ") };
            Ok(format!(
                "🤖 Programming robot: {program}\n\n📋 Loading program...\n🔧 Compiling code...\n📤 Uploading to robot...\n\
                 ✅ Program uploaded successfully!\n\n🤖 Robot ready for execution"
            ))
        })
        .command("robot:auto", |state, _| {
            state.valuation.record_character_spawn();
            Ok("🤖 Running automation sequence...

⚙️ Step 1: Initialize systems
⚙️ Step 2: Load configuration
⚙️ Step 3: Start main loop
⚙️ Step 4: Execute tasks

📊 Status: Running
🔄 Loop count: 1000
✅ Automation active"
                .to_string())
        })
        .command("robot:sensors", |state, _| {
            let rng = &mut state.rng;
            let temp: f64 = rng.gen_range(20.0..30.0);
            let distance: u32 = rng.gen_range(0..=200);
            let battery: u32 = rng.gen_range(80..=100);
            let volts: u32 = rng.gen_range(0..9);
            let heading: u32 = rng.gen_range(0..360);
            Ok(format!(
                "🤖 Sensor readings:\n\n🌡️  Temperature: {temp:.1}°C\n📏 Distance: {distance}cm\n🔋 Battery: {battery}%\n\
                 ⚡ Voltage: 12.{volts}V\n🧭 Heading: {heading}°\n\n✅ All sensors operational"
            ))
        })
        .command("robot:move", |state, args| {
            let direction = arg_or(args, 0, "forward");
            let cm = arg_or(args, 1, "10");
            state.valuation.record_character_spawn();
            Ok(format!("🤖 Moving {direction} {cm}cm...\n🚗 *whirrrr*\n✅ Movement complete"))
        })
        .command("robot:status", |_, _| {
            Ok("🤖 Robot Status:

💡 State: Active
🔋 Power: 95%
📡 Connection: Strong
⚙️  Motors: Operational
👀 Vision: Online
🧠 AI: Ready

✅ All systems nominal"
                .to_string())
        })
}
