//! `mcview interactive` – line-oriented search session.

use anyhow::Result;
use mcview_core::config::McviewConfig;
use mcview_core::{LayoutMode, SearchState};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::lookup::{new_session, search};

const PROMPT: &str = "Nombre> ";
const HELP: &str = "Escribe un nombre de usuario para buscar. :r cambia la pose, :c limpia, :q sale.";

pub async fn run_interactive(cfg: &McviewConfig, layout: LayoutMode) -> Result<()> {
    let mut session = new_session(cfg)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    loop {
        print!("{PROMPT}");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.as_str() {
            ":q" => break,
            ":h" => println!("{HELP}"),
            ":c" => session.clear(),
            ":r" => match session.reroll_pose() {
                Some(_) => print_state(session.state(), layout),
                None => eprintln!("No hay skin cargada."),
            },
            username => {
                if let Err(e) = search(&mut session, username).await {
                    eprintln!("{e}");
                    continue;
                }
                print_state(session.state(), layout);
            }
        }
    }
    Ok(())
}

fn print_state(state: &SearchState, layout: LayoutMode) {
    match state {
        SearchState::Loaded(view) => print!("{}", view.render(layout)),
        SearchState::Errored(msg) => eprintln!("{msg}"),
        SearchState::Idle | SearchState::Loading { .. } => {}
    }
}
