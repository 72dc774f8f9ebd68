//! The `lexiquiz init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_absent(Path::new("lexiquiz.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("data/users")?;
    write_if_absent(Path::new("data/dictionary.csv"), SAMPLE_DICTIONARY)?;

    println!("\nNext steps:");
    println!("  1. Add your own words to data/dictionary.csv");
    println!("  2. Run: lexiquiz validate");
    println!("  3. Run: lexiquiz play");

    Ok(())
}

fn write_if_absent(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# lexiquiz configuration

dictionary = "data/dictionary.csv"
data_dir = "data/users"
max_attempts = 3

# Skip the direction menu: "source_to_target" or "target_to_source"
# default_direction = "source_to_target"
"#;

const SAMPLE_DICTIONARY: &str = "english;french
cat,feline;chat,félin
dog;chien
house,home;maison
to be hungry;avoir faim
good morning,hello;bonjour
thank you;merci
the book;le livre
water;eau
to eat;manger
see you soon;à bientôt
";
