use std::sync::Arc;

use colored::Colorize;

use calc_lang::{
    history::{BackgroundHistory, FileHistory, HistoryRecorder},
    session::Session,
};
use config::Config;
use display::{ColoredDisplay, ColoredRecord};
use repl::{evaluate, read, Feedback, REPLError};

mod config;
mod display;
mod keys;
mod repl;

const HELP: &str = "\
keys      0-9 operands, + - × ÷ operators (* x / also work), < removes the last key, = calculates
commands  :history  :help  :quit";

fn print_feedback(feedback: Feedback) -> bool {
    match feedback {
        Feedback::Display(text) | Feedback::Result(text) => {
            println!("{}", ColoredDisplay::new(text))
        }
        Feedback::IncompleteExpression => println!("{}", "Incomplete expression".yellow()),
        Feedback::Error(err) => println!("{}", err),
        Feedback::History(records) if records.is_empty() => {
            println!("{}", "No calculations yet".dimmed())
        }
        Feedback::History(records) => {
            for (index, record) in records.iter().enumerate() {
                println!("{}", ColoredRecord::new(index + 1, record));
            }
        }
        Feedback::Help => println!("{}", HELP),
        Feedback::Quit => return false,
    }

    true
}

fn open_history(config: &Config) -> Arc<dyn HistoryRecorder> {
    let file = Arc::new(FileHistory::new(config.history_file.clone()));

    match BackgroundHistory::new(file.clone()) {
        Ok(background) => Arc::new(background),
        Err(e) => {
            log::warn!("{}, saving calculations on the main thread", e);
            file
        }
    }
}

fn main() {
    env_logger::init();

    let config = config::load().unwrap_or_else(|e| {
        log::warn!("{}", e);
        Config::default()
    });
    log::debug!("{:?}", config);

    if !config.colors {
        colored::control::set_override(false);
    }

    let color_mode = if config.colors {
        rustyline::ColorMode::Enabled
    } else {
        rustyline::ColorMode::Disabled
    };
    let rl_config = rustyline::Config::builder()
        .auto_add_history(true)
        .color_mode(color_mode)
        .build();

    let mut rl = match rustyline::Editor::<()>::with_config(rl_config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Could not start the line editor: {}", e);
            std::process::exit(1);
        }
    };

    if rl.load_history(&config.readline_history).is_err() {
        log::debug!("No line history at {}", config.readline_history.display());
    }

    let mut session = Session::new(open_history(&config));

    loop {
        match read(&mut rl, &config.prompt).and_then(|input| evaluate(&mut session, &input)) {
            Ok(feedback) => {
                if !feedback.into_iter().all(print_feedback) {
                    break;
                }
            }
            Err(err) => {
                println!("{}", err);
                if let REPLError::Exit | REPLError::Readline(_) = err {
                    break;
                }
            }
        }
    }

    if let Some(dir) = config.readline_history.parent() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            log::warn!("Could not create {}: {}", dir.display(), e);
        }
    }
    if let Err(e) = rl.save_history(&config.readline_history) {
        log::warn!("Could not save line history: {}", e);
    }
}
