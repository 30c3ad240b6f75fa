use anyhow::Result;
use protdesc_core::{Catalog, CatalogFlavor};

pub fn execute(flavor: CatalogFlavor) -> Result<()> {
    let catalog = Catalog::get(flavor);
    println!("catalog: {flavor} ({} slots)", catalog.slots().len());
    for (slot, scale) in catalog.slots().iter().enumerate() {
        let [one, two, three] = scale.groups();
        println!(
            "{slot:>2}  {:<28} 1={one} 2={two} 3={three}  # {}",
            scale.name(),
            scale.description()
        );
    }

    let issues = catalog.validate();
    if issues.is_empty() {
        println!("no issues");
    } else {
        println!("{} issues:", issues.len());
        for issue in issues {
            println!("  {issue}");
        }
    }
    Ok(())
}
