use std::fs;
use std::io::Write;

use clap::{Args, Parser, Subcommand};
use cryptokit::{AnnealingConfig, CryptokitError, VigenereConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the cryptokit program.
#[derive(Parser, Debug)]
#[command(name = "cryptokit", version, about = "AES/DES block ciphers and classical-cipher solvers")]
struct Cli {
    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a file with AES; prints the hex ciphertext
    AesEncrypt(BlockArgs),
    /// Decrypt a hex AES ciphertext
    AesDecrypt(BlockArgs),
    /// Encrypt a file with DES; prints the hex ciphertext
    DesEncrypt(BlockArgs),
    /// Decrypt a hex DES ciphertext
    DesDecrypt(BlockArgs),
    /// Brute-force a Caesar ciphertext
    Caesar(TextArgs),
    /// Solve a monoalphabetic substitution by simulated annealing
    Mono {
        #[command(flatten)]
        text: TextArgs,

        /// Proposals per annealing run
        #[arg(long, default_value_t = 40_000)]
        iterations: usize,

        /// Initial temperature
        #[arg(long, default_value_t = 4.0)]
        temperature: f64,

        /// Temperature multiplier per proposal
        #[arg(long, default_value_t = 0.9993)]
        cooling: f64,

        /// Independent runs; the best one is kept
        #[arg(long, default_value_t = 4)]
        restarts: usize,
    },
    /// Recover the key of a Vigenère ciphertext
    Vigenere {
        #[command(flatten)]
        text: TextArgs,

        /// Longest key length considered
        #[arg(long, default_value_t = 20)]
        max_key_len: usize,

        /// IC multiplier for lengths close to a Kasiski candidate
        #[arg(long, default_value_t = 1.1)]
        kasiski_boost: f64,
    },
}

#[derive(Args, Debug)]
struct BlockArgs {
    /// Path to the input file (raw bytes to encrypt, hex text to decrypt)
    #[arg(short, long)]
    file: String,

    /// Key as hex
    #[arg(short, long)]
    key: String,

    /// Mode of operation (ECB or CBC)
    #[arg(short, long, default_value = "CBC")]
    mode: String,

    /// IV as hex; generated when encrypting in CBC mode without one
    #[arg(long)]
    iv: Option<String>,

    /// Path to the output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Args, Debug)]
struct TextArgs {
    /// Path to the input file containing the ciphertext
    #[arg(short, long)]
    file: String,

    /// Path to the output file for the decrypted text (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,
}

/// Decoded key and IV of a block-cipher invocation
struct BlockParams {
    key: Vec<u8>,
    iv: Option<Vec<u8>>,
}

impl BlockArgs {
    fn params(&self) -> Result<BlockParams, CryptokitError> {
        let key = hex::decode(self.key.trim())?;
        let iv = self.iv.as_deref().map(|iv| hex::decode(iv.trim())).transpose()?;
        Ok(BlockParams { key, iv })
    }
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<(), CryptokitError> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            info!(path, bytes = content.len(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn report_iv(iv: Option<&[u8]>) {
    if let Some(iv) = iv {
        eprintln!("IV: {}", hex::encode(iv));
    }
}

fn main() -> Result<(), CryptokitError> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::AesEncrypt(args) => {
            let params = args.params()?;
            let plaintext = fs::read(&args.file)?;
            let (ciphertext, iv) = cryptokit::aes_encrypt(&plaintext, &params.key, &args.mode, params.iv.as_deref())?;
            report_iv(iv.as_deref());
            write_output(args.output.as_deref(), ciphertext.as_bytes())?;
        }
        Command::AesDecrypt(args) => {
            let params = args.params()?;
            let ciphertext = fs::read_to_string(&args.file)?;
            let plaintext = cryptokit::aes_decrypt(&ciphertext, &params.key, &args.mode, params.iv.as_deref())?;
            write_output(args.output.as_deref(), &plaintext)?;
        }
        Command::DesEncrypt(args) => {
            let params = args.params()?;
            let plaintext = fs::read(&args.file)?;
            let (ciphertext, iv) = cryptokit::des_encrypt(&plaintext, &params.key, &args.mode, params.iv.as_deref())?;
            report_iv(iv.as_deref());
            write_output(args.output.as_deref(), hex::encode(ciphertext).as_bytes())?;
        }
        Command::DesDecrypt(args) => {
            let params = args.params()?;
            let ciphertext = hex::decode(fs::read_to_string(&args.file)?.trim())?;
            let plaintext = cryptokit::des_decrypt(&ciphertext, &params.key, &args.mode, params.iv.as_deref())?;
            write_output(args.output.as_deref(), &plaintext)?;
        }
        Command::Caesar(text) => {
            let ciphertext = fs::read_to_string(&text.file)?;
            let (key, plaintext) = cryptokit::caesar_bruteforce(&ciphertext);
            eprintln!("Key: {}", key);
            write_output(text.output.as_deref(), plaintext.as_bytes())?;
        }
        Command::Mono {
            text,
            iterations,
            temperature,
            cooling,
            restarts,
        } => {
            let ciphertext = fs::read_to_string(&text.file)?;
            let config = AnnealingConfig {
                iterations,
                initial_temperature: temperature,
                cooling_rate: cooling,
                restarts,
            };
            let (score, mapping, plaintext) = cryptokit::mono_decrypt_with(&ciphertext, &config);
            let alphabet: String = mapping.values().collect();
            eprintln!("Score: {:.4}", score);
            eprintln!("Mapping: abcdefghijklmnopqrstuvwxyz -> {}", alphabet);
            write_output(text.output.as_deref(), plaintext.as_bytes())?;
        }
        Command::Vigenere {
            text,
            max_key_len,
            kasiski_boost,
        } => {
            let ciphertext = fs::read_to_string(&text.file)?;
            let config = VigenereConfig {
                max_key_len,
                kasiski_boost,
                ..VigenereConfig::default()
            };
            let (key, plaintext) = cryptokit::vigenere_auto_decrypt_with(&ciphertext, &config);
            eprintln!("Key: {}", key);
            write_output(text.output.as_deref(), plaintext.as_bytes())?;
        }
    }

    Ok(())
}
