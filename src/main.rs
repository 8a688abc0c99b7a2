use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use chapter_splitter::{reader, split_text, writer, SplitError};

/// 按章节切分 txt/md 并输出为 markdown 文件
#[derive(Parser)]
#[command(name = "chapter-splitter", about = "按章节切分 txt/md 并输出为 markdown 文件")]
struct Cli {
    /// 输入文件路径（txt/md）
    #[arg(short, long)]
    input: PathBuf,

    /// 输出目录（默认：与输入同目录，书名_章节分割）
    #[arg(short, long)]
    outdir: Option<PathBuf>,

    /// 不写文件，将分段列表以 JSON 输出到标准输出
    #[arg(long)]
    json: bool,
}

/// 推导默认输出目录：与输入同目录的 "书名_章节分割"
fn derive_output_dir(input: &Path, outdir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = outdir {
        return dir;
    }
    let base_dir = input.parent().unwrap_or_else(|| Path::new("."));
    let book_name = book_name_of(input);
    base_dir.join(format!("{}_章节分割", book_name))
}

/// 从输入路径提取书名（去掉路径和扩展名）
fn book_name_of(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("未命名书籍")
        .to_string()
}

fn run(cli: Cli) -> Result<(), SplitError> {
    let content = reader::read_text(&cli.input)?;
    let sections = split_text(&content);

    if cli.json {
        let json = serde_json::to_string_pretty(&sections)?;
        println!("{}", json);
        return Ok(());
    }

    let book_name = book_name_of(&cli.input);
    let output_dir = derive_output_dir(&cli.input, cli.outdir);
    let written = writer::write_sections(&output_dir, &book_name, &sections)?;

    println!("完成：共输出 {} 个文件 -> {}", written.len(), output_dir.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_dir_default() {
        let input = Path::new("/books/思考快与慢.txt");
        let dir = derive_output_dir(input, None);
        assert_eq!(dir, Path::new("/books/思考快与慢_章节分割"));
    }

    #[test]
    fn test_derive_output_dir_explicit() {
        let input = Path::new("/books/思考快与慢.txt");
        let dir = derive_output_dir(input, Some(PathBuf::from("/tmp/out")));
        assert_eq!(dir, Path::new("/tmp/out"));
    }

    #[test]
    fn test_book_name_of() {
        assert_eq!(book_name_of(Path::new("/books/三国演义.txt")), "三国演义");
        assert_eq!(book_name_of(Path::new("README.md")), "README");
    }
}
