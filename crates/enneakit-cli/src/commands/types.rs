use std::error::Error;

use clap::Subcommand;

use enneakit_core::content;
use enneakit_core::TypeId;

#[derive(Subcommand)]
pub enum TypesAction {
    /// Print the full profile for one type
    Show { number: u8 },
    /// List all nine types
    List,
}

pub fn run(action: TypesAction) -> Result<(), Box<dyn Error>> {
    match action {
        TypesAction::Show { number } => {
            let t = TypeId::from_number(number)
                .ok_or_else(|| format!("type number must be 1-9, got {number}"))?;
            let (wing_a, wing_b) = t.wings();
            println!("Type {}: {}", t.number(), t.name());
            println!();
            println!("{}", content::type_summary(t));
            println!();
            println!("Center:    {:?}", t.center());
            println!("Harmonic:  {:?}", t.harmonic_group());
            println!("Hornevian: {:?}", t.hornevian_group());
            println!("Wings:     {} and {}", wing_a.number(), wing_b.number());
            println!();
            println!("{}", content::growth_text(t));
            println!("{}", content::stress_text(t));
            Ok(())
        }
        TypesAction::List => {
            for t in TypeId::ALL {
                println!("{}  {}", t.number(), t.name());
            }
            Ok(())
        }
    }
}
