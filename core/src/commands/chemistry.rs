use rand::Rng;

use crate::router::CommandTable;

fn formula_for(compound: &str) -> &'static str {
    match compound.to_lowercase().as_str() {
        "water" => "H₂O",
        "salt" => "NaCl",
        "sugar" => "C₁₂H₂₂O₁₁",
        "oxygen" => "O₂",
        "carbon dioxide" => "CO₂",
        _ => "Unknown",
    }
}

pub fn table() -> CommandTable {
    CommandTable::new("chemistry")
        .command("chem:mix", |_, args| {
            let [a, b, ..] = args else {
                return Ok("🧪 Usage: chem:mix <compound1> <compound2>\nExample: chem:mix H2 O2".to_string());
            };
            Ok(format!(
                "🧪 Mixing {a} + {b}...\n\n⚗️ Reaction in progress...\n{a} + {b} → Product\n\n\
                 🔬 Observations:\n  • Color change detected\n  • Temperature: +5°C\n  • pH: 7.2\n\n✅ Mixture complete!"
            ))
        })
        .command("chem:balance", |_, args| {
            if args.is_empty() {
                return Ok("🧪 Usage: chem:balance <equation>\nExample: chem:balance H2+O2->H2O".to_string());
            }
            Ok(format!(
                "🧪 Balancing equation: {}\n\n⚗️ Analyzing reactants and products...\n🔬 Calculating stoichiometry...\n\n\
                 Balanced equation:\n2H₂ + O₂ → 2H₂O\n\n✅ Equation balanced!",
                args.join(" ")
            ))
        })
        .command("chem:react", |_, _| {
            Ok("🧪 Running chemical reaction...

⚗️ Stage 1: Mixing reactants
⚗️ Stage 2: Heating solution
⚗️ Stage 3: Cooling precipitate

📊 Results:
  • Yield: 95.3%
  • Purity: 99.1%
  • Color: Clear
  • State: Solid

✅ Reaction complete!"
                .to_string())
        })
        .command("chem:ph", |state, args| {
            let solution = if args.is_empty() { "sample".to_string() } else { args.join(" ") };
            // rounded first so the label always agrees with the printed value
            let ph = (state.rng.gen_range(0.0..14.0_f64) * 10.0).round() / 10.0;
            let kind = if ph < 7.0 {
                "acidic"
            } else if ph > 7.0 {
                "basic"
            } else {
                "neutral"
            };
            Ok(format!("🧪 Testing pH of {solution}:\n📊 pH = {ph:.1} ({kind})"))
        })
        .command("chem:formula", |_, args| {
            let compound = if args.is_empty() { "water".to_string() } else { args.join(" ") };
            Ok(format!("🧪 Molecular formula for {compound}:\n📊 {}", formula_for(&compound)))
        })
}
