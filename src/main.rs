use clap::Parser;
use exercise_video_ai::{cli, config, error, runner, scanner};
use cli::{Cli, Commands, CompareMode};
use config::Config;
use error::Result;
use exercise_video_common::ComparisonMode;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Train { exercise, paths } => {
            let config = Config::load()?;
            println!("🏋 exercise-video-ai - 擬似学習\n");

            let files = scanner::scan_paths(&paths)?;
            println!("[1/2] {}件のファイルを検出", files.len());

            println!("[2/2] 学習中... ({})", exercise);
            let report = runner::train(files, exercise, &config.simulation, true).await?;
            if report.dropped > 0 {
                println!("- 動画以外を{}件除外", report.dropped);
            }
            println!("✔ {}本の動画で学習完了\n", report.accepted);

            println!("Submitted Videos:");
            for record in &report.submitted {
                println!("  ✔ {}", record);
            }
            println!(
                "\n✅ Your model has been successfully trained with the uploaded videos for {}.",
                exercise
            );
        }

        Commands::Compare { mode } => {
            let config = Config::load()?;
            println!("🔍 exercise-video-ai - 擬似比較\n");

            let (mode, paths) = match mode {
                CompareMode::Pretrained { video } => (ComparisonMode::Pretrained, vec![video]),
                CompareMode::Reference { reference, comparison } => {
                    (ComparisonMode::Reference, vec![reference, comparison])
                }
            };
            let files = paths
                .iter()
                .map(|p| scanner::describe(p))
                .collect::<Result<Vec<_>>>()?;

            println!("{}", mode.title());
            let score = runner::compare(mode, files, &config.simulation, true).await?;

            println!("\nComparison Results");
            println!("  Similarity Score: {}", score);
            println!("  {}", score.tier().message());
        }

        Commands::Config { training_delay_ms, comparison_delay_ms, max_upload_bytes, show } => {
            let mut config = Config::load_or_default();
            let changed = training_delay_ms.is_some()
                || comparison_delay_ms.is_some()
                || max_upload_bytes.is_some();

            if let Some(ms) = training_delay_ms {
                config.simulation.training_delay_ms = ms;
            }
            if let Some(ms) = comparison_delay_ms {
                config.simulation.comparison_delay_ms = ms;
            }
            if let Some(bytes) = max_upload_bytes {
                config.simulation.max_upload_bytes = (bytes > 0).then_some(bytes);
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let sim = &config.simulation;
                println!("設定:");
                println!("  学習待ち時間: {}ms", sim.training_delay_ms);
                println!("  比較待ち時間: {}ms", sim.comparison_delay_ms);
                println!("  スコア範囲: {}〜{}", sim.min_score, sim.max_score);
                match sim.max_upload_bytes {
                    Some(bytes) => println!("  サイズ上限: {} bytes", bytes),
                    None => println!("  サイズ上限: なし"),
                }
            }
        }
    }

    Ok(())
}
