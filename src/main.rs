use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use wipedir::application::{self, ColorChoice, Config};
use wipedir::{ConsoleSink, ForceMode, LineGate, Logger, LoggerTrait, OutputSink, SearchRequest, Style};

/// 查找并删除匹配名称的目录
#[derive(Parser, Debug)]
#[clap(name = "wipedir", author, version, about, long_about = None)]
struct Args {
    /// 起始目录
    #[clap(short, long)]
    start: String,

    /// 要删除的目录名 (支持 * ? [] 通配符), 删除多个目录时最多可提供 10 次
    #[clap(short = 'd', long = "dir", required = true)]
    dirs: Vec<String>,

    /// 强制删除 (尚未实现)
    #[clap(short, long)]
    force: bool,

    /// 递归搜索所有子目录
    #[clap(short, long)]
    recursive: bool,

    /// 启用详细日志记录, 日志文件将保存到当前目录下
    #[clap(long)]
    log: bool,

    /// 配置文件路径, 默认读取程序同级目录下的 wipedir.toml (如果存在)
    #[clap(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help 和 --version 也通过错误返回
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            report(&mut ConsoleSink::new(ColorChoice::Auto), &err);
            return ExitCode::FAILURE;
        }
    };

    let mut sink = ConsoleSink::new(config.display.color);
    match execute(&args, &config, &mut sink) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&mut sink, &err);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args, config: &Config, sink: &mut dyn OutputSink) -> Result<()> {
    // 校验必须在任何搜索和删除之前完成
    let request = SearchRequest::new(
        &args.start,
        args.dirs.clone(),
        args.recursive,
        ForceMode::from(args.force),
    )?;

    let logger = Logger::new(args.log)?;
    if logger.is_enabled() {
        sink.emit(Style::Plain, &format!("日志文件已创建: {}", logger.log_path().display()))?;
    }

    let mut gate = LineGate::stdin();
    application::run(&request, config, sink, &mut gate, &logger)?;

    if logger.is_enabled() {
        sink.emit(Style::Plain, &format!("完整日志已保存到: {}", logger.log_path().display()))?;
    }

    Ok(())
}

fn report(sink: &mut dyn OutputSink, err: &anyhow::Error) {
    let _ = sink.emit(Style::Error, &format!("{:#}", err));
}
