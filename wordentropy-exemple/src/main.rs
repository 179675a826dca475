use wordentropy_core::generate::generator::Generator;
use wordentropy_core::generate::options::{GenerateOptions, WordListOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load the tagged word list and the optional offensive list from the
    // "data" directory. The parsed map is cached next to the word list as
    // a .bin file and reloaded automatically on the next run.
    let generator = Generator::load(&WordListOptions {
        wordlist: "./data/part-of-speech.txt".into(),
        offensive: Some("./data/offensive.txt".into()),
    })?;

    // How many words of each type were classified
    for (word_type, words) in generator.word_map().iter() {
        println!("{}: {}", word_type, words.len());
    }

    // Zero values select the defaults: 4 passphrases of 5 words each,
    // built from 4-word fragments
    let mut options = GenerateOptions::default();

    // Out-of-bounds values are rejected before any generation happens
    options.count = 100;
    match generator.generate_passphrases(&options) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Count 100 is invalid: {e}"),
    }

    // Two passphrases of 6 words each, with offensive filtering and a
    // digit suffix
    options.count = 2;
    options.length = 6;
    options.prudish = true;
    options.add_digit = true;

    for passphrase in generator.generate_passphrases(&options)? {
        println!("{passphrase}");
    }

    Ok(())
}
