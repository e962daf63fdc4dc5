use std::error::Error;

use g2p::{Lexicon, Normalizer, PhonemeSymbols, Phonemizer};

struct Args {
    /// Text to convert to phonemes.
    text: String,

    /// Path of the pronunciation lexicon file.
    lexicon: String,
}

fn parse_args() -> Result<Args, lexopt::Error> {
    use lexopt::prelude::*;

    let mut text = None;
    let mut lexicon = "data/cmu-dictionary.txt".to_string();

    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('t') | Long("text") => text = Some(parser.value()?.string()?),
            Short('d') | Long("dict") => lexicon = parser.value()?.string()?,
            Short('h') | Long("help") => {
                println!(
                    "Convert text to a phonemic transcription.

Usage: {bin_name} [OPTIONS] -t <TEXT>

  -t, --text <TEXT>  Text to convert
  -d, --dict <PATH>  Pronunciation lexicon path (default: data/cmu-dictionary.txt)
  -h, --help         Print help
",
                    bin_name = parser.bin_name().unwrap_or("g2p")
                );
                std::process::exit(0);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    let text = text.ok_or("missing `-t <TEXT>` arg")?;

    Ok(Args { text, lexicon })
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;

    let symbols = PhonemeSymbols::cmudict_ipa();
    let lexicon = Lexicon::from_file(&args.lexicon, &symbols)?;

    let normalizer = Normalizer::new();
    let phonemizer = Phonemizer::new(lexicon);

    let normalized = normalizer.normalize(&args.text);
    println!("{}", phonemizer.phonemize(&normalized));

    Ok(())
}
