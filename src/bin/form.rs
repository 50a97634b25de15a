//! Interactive expert form
//!
//! Pick an expert, type a question, and get the answer from the language model.
//!
//! Usage: cargo run --bin expert-form

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use dotenvy::dotenv;
use log::{error, info, warn};
use std::sync::Arc;

use expert_switch::core::Config;
use expert_switch::features::completion::OpenAiCompletion;
use expert_switch::features::personas::{PersonaManager, PERSONA_CHOICES};
use expert_switch::features::responder::PersonaResponder;

fn print_overview() {
    println!("🛠️ 専門家A/Bを切り替えて質問");
    println!("Powered by OpenAI\n");
    println!("📘 このアプリの概要と使い方");
    println!("  できること");
    println!("  - テキストを1つ入力して送信すると、LLMに投げて回答を表示します。");
    println!("  - 「A（建設DXコンサル）」か「B（TikTokグロース）」を選ぶと、");
    println!("    それぞれの専門家としてのシステムメッセージが挿し替わり、回答の切り口が変わります。");
    println!("  使い方");
    println!("  1. 専門家を選ぶ");
    println!("  2. 質問や相談内容を書く（例：「現場の安全点検を効率化したい」「フォローが伸びない」）");
    println!("  3. Enter で送信すると、回答が下に表示されます");
    println!("  環境準備");
    println!("  - 事前に OPENAI_API_KEY を環境変数か .env で設定してください\n");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting expert form | Model: {}", config.openai_model);
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set - questions will fail until it is configured");
    }

    let client = OpenAiCompletion::new(config.openai_api_key.clone())
        .with_base_url(config.openai_base_url.clone())
        .with_timeout(config.request_timeout());
    let responder = PersonaResponder::new(
        PersonaManager::new(),
        Arc::new(client),
        config.model_settings(),
    );

    print_overview();

    loop {
        let choice = Select::new()
            .with_prompt("専門家を選択")
            .items(PERSONA_CHOICES)
            .default(0)
            .interact()?;
        let expert = PERSONA_CHOICES[choice];

        println!("例）工程遅延を最小化する現場運用の型を作りたい／3秒で掴むフック案を増やしたい など");
        let user_text: String = Input::new()
            .with_prompt("入力テキスト")
            .allow_empty(true)
            .interact_text()?;

        println!("\n専門家が考え中…");
        match responder.respond(&user_text, expert).await {
            Ok(answer) => {
                println!("回答が届きました\n");
                println!("### ✍️ 回答\n");
                println!("{answer}");
            }
            Err(e) => {
                error!("Completion failed: {e:#}");
                eprintln!("エラーが発生しました：{e}");
            }
        }

        let system_prompt = responder
            .persona_manager()
            .get_persona(expert)
            .map(|p| p.system_prompt.as_str())
            .unwrap_or("");
        println!("\n🔧 現在の専門家プロンプト（Systemメッセージ）");
        println!("{system_prompt}\n");

        let again = Confirm::new()
            .with_prompt("続けて質問しますか？")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}
