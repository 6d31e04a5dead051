use crate::text::generate_variants;
use crate::types::Context;

pub fn variants(name: &str) {
    let variants = generate_variants(name);

    if variants.is_empty() {
        println!("\nNo variants: a name needs at least two tokens\n");
    } else {
        println!("\nVariants for {}:", name);
        for variant in variants.iter() {
            println!("- {}", variant);
        }
        println!();
    }
}

pub fn regions(country: &str) {
    let context = Context::new(country);
    let regions = context.regions();

    if regions.is_empty() {
        println!("\nNo Regions Built In for {}\n", context.country);
    } else {
        println!("\nRegions of {}:", context.country_name().unwrap_or_else(|| context.country.clone()));
        for region in regions {
            println!("- {}", region);
        }
        println!();
    }
}
