use text_verifier::config::{self, AppConfig};
use text_verifier::prelude::*;

// cargo run --bin text_verifier analyze "The cat sat on the mat."
// cargo run --bin text_verifier vote
// cargo run --bin text_verifier verify

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let matches = clap::Command::new(config::APP_TITLE)
        .subcommand_required(true)
        .subcommand(
            clap::Command::new("analyze")
                .about("Classify text as AI-generated or human-written")
                .arg(
                    clap::Arg::new("text")
                        .help("The text to analyze")
                        .required(true),
                ),
        )
        .subcommand(clap::Command::new("vote").about("Vote on the seeded text snippets"))
        .subcommand(clap::Command::new("verify").about("Run the personhood verification flow"))
        .get_matches();

    let config = AppConfig::from_env();

    match matches.subcommand() {
        Some(("analyze", sub)) => {
            verify_personhood(&config).await?;
            let text = sub
                .get_one::<String>("text")
                .expect("text is a required arg");
            let verifier: TextVerifier = TextVerifier::gemini().init()?.into();
            let analysis = verifier.analyze_text().run(text).await;
            println!("{analysis}");
        }
        Some(("vote", _)) => {
            verify_personhood(&config).await?;
            run_voting()?;
        }
        Some(("verify", _)) => {
            verify_personhood(&config).await?;
            println!("You are verified as a unique human.");
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

/// Gate the personhood-bound features behind one verification pass.
async fn verify_personhood(config: &AppConfig) -> anyhow::Result<()> {
    let mut provider = IdentityProvider::init(SimulatedWorldId::default(), config).await;
    if !provider.is_available() {
        anyhow::bail!(
            "Verification unavailable: {}",
            provider.error().unwrap_or("identity widget failed to start")
        );
    }

    match provider.verify().await {
        VerificationStatus::Verified => {
            if let Some(proof) = provider.proof() {
                println!("Verified. Nullifier: {}", proof.nullifier_hash);
            }
            Ok(())
        }
        _ => anyhow::bail!(
            "Verification failed: {}",
            provider.error().unwrap_or("unknown error")
        ),
    }
}

fn run_voting() -> anyhow::Result<()> {
    let mut deck = VotingDeck::new(config::sample_snippets());
    let stdin = std::io::stdin();

    while let Some(snippet) = deck.current() {
        println!(
            "\nSnippet {} of {}:\n\n{}\n",
            deck.position() + 1,
            deck.len(),
            snippet.text
        );
        println!("[a] AI generated  [h] Human written  [q] quit");

        let mut line = String::new();
        stdin.read_line(&mut line)?;
        match line.trim() {
            "a" => {
                deck.cast(Vote::Ai);
                println!("Thank you for your vote!");
            }
            "h" => {
                deck.cast(Vote::Human);
                println!("Thank you for your vote!");
            }
            "q" => return Ok(()),
            _ => println!("Please answer 'a', 'h', or 'q'."),
        }
    }

    if let Some(message) = deck.message() {
        println!("{message}");
    }
    Ok(())
}
