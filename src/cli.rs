use clap::{Parser, Subcommand};
use exercise_video_common::Exercise;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exercise-video-ai")]
#[command(about = "エクササイズ動画の擬似学習・類似度比較ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 動画を送信してモデルを擬似学習
    Train {
        /// エクササイズ (Pushup/Squat/Planks/Crunches/"Bicep Curls"/"Jumping Jacks")
        #[arg(short, long)]
        exercise: Exercise,

        /// 動画ファイルまたはフォルダ（直下のみ）
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// 動画の類似度を擬似比較
    Compare {
        #[command(subcommand)]
        mode: CompareMode,
    },

    /// シミュレーション設定
    Config {
        /// 学習の待ち時間（ミリ秒）
        #[arg(long)]
        training_delay_ms: Option<u32>,

        /// 比較の待ち時間（ミリ秒）
        #[arg(long)]
        comparison_delay_ms: Option<u32>,

        /// 1ファイルあたりのサイズ上限（バイト、0で無制限）
        #[arg(long)]
        max_upload_bytes: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum CompareMode {
    /// 学習済みモデルと比較（1本）
    Pretrained {
        video: PathBuf,
    },

    /// 参照動画と比較（2本）
    Reference {
        /// 参照動画
        reference: PathBuf,
        /// 比較する動画
        comparison: PathBuf,
    },
}
