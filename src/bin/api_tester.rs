//! API Tester shell.
//!
//! A line-oriented surface over the controller: set the draft fields, send
//! the request, browse the paginated history, replay or delete entries.
//! Stdout carries the panels and prompts; all logging goes to stderr.

use api_tester::config::{self, AppConfig};
use api_tester::history::format_history_list;
use api_tester::{ApiTester, HttpMethod, SupabaseGateway};
use log::warn;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  url <value>        set the request URL
  method <name>      set the method (GET, POST, PUT, DELETE)
  headers <json>     set the header text (JSON object)
  body <json>        set the body text (sent for POST/PUT)
  draft              show the current draft
  send               execute the request
  history            show the visible history page
  more               reveal the next 20 history entries
  replay <id>        re-issue a past request
  delete <id>        delete a history entry
  instruments        list stored instruments
  help               show this help
  quit               exit";

#[tokio::main]
async fn main() {
    env_logger::init();

    let app_config = AppConfig::from_env();
    config::warn_if_incomplete(&app_config);

    let gateway = SupabaseGateway::from_config(&app_config);
    let mut tester = ApiTester::new(gateway);

    if let Err(err) = tester.load_history().await {
        warn!("could not load history: {}", err);
    }

    println!("api-tester - type 'help' for commands");
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "url" => tester.draft_mut().url = rest.to_string(),
            "method" => match HttpMethod::from_str(rest) {
                Some(method) => tester.draft_mut().method = method,
                None => {
                    let supported: Vec<&str> =
                        HttpMethod::ALL.iter().map(|m| m.as_str()).collect();
                    println!(
                        "unsupported method {:?}; use one of {}",
                        rest,
                        supported.join(", ")
                    );
                }
            },
            "headers" => {
                tester.draft_mut().headers_text = if rest.is_empty() {
                    String::from("{}")
                } else {
                    rest.to_string()
                }
            }
            "body" => {
                tester.draft_mut().body_text = if rest.is_empty() {
                    String::from("{}")
                } else {
                    rest.to_string()
                }
            }
            "draft" => print_draft(&tester),
            "send" => {
                let report = tester.submit().await;
                print_response(&tester, report.response.as_ref().map(|r| r.status_line()));
            }
            "history" => print_history(&tester),
            "more" => {
                let revealed = tester.load_more();
                if revealed == 0 {
                    println!("no more entries");
                } else {
                    print_history(&tester);
                }
            }
            "replay" => match parse_id(rest) {
                Some(id) => match tester.replay(id).await {
                    Ok(report) => {
                        print_response(&tester, report.response.as_ref().map(|r| r.status_line()))
                    }
                    Err(err) => println!("{}", err),
                },
                None => println!("usage: replay <id>"),
            },
            "delete" => match parse_id(rest) {
                Some(id) => match tester.delete_entry(id).await {
                    Ok(()) => println!("deleted #{}", id),
                    Err(err) => println!("delete failed: {}", err),
                },
                None => println!("usage: delete <id>"),
            },
            "instruments" => match tester.list_instruments().await {
                Ok(instruments) => {
                    for instrument in instruments {
                        println!("{} {}", instrument.id, instrument.name);
                    }
                }
                Err(err) => println!("could not list instruments: {}", err),
            },
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("unknown command {:?}; type 'help'", other),
        }
    }
}

fn parse_id(text: &str) -> Option<i64> {
    text.parse().ok()
}

fn print_draft<G: api_tester::PersistenceGateway>(tester: &ApiTester<G>) {
    let draft = tester.draft();
    println!("{} {}", draft.method, draft.url);
    println!("headers: {}", draft.headers_text);
    if draft.method.has_body() {
        println!("body: {}", draft.body_text);
    }
}

fn print_response<G: api_tester::PersistenceGateway>(
    tester: &ApiTester<G>,
    status_line: Option<String>,
) {
    println!("--- response ---");
    if let Some(status) = status_line {
        println!("{}", status);
    }
    println!("{}", tester.response_text());
}

fn print_history<G: api_tester::PersistenceGateway>(tester: &ApiTester<G>) {
    let history = tester.history();
    if history.is_empty() {
        println!("history is empty");
        return;
    }
    for line in format_history_list(history.visible()) {
        println!("{}", line);
    }
    println!(
        "showing {} of {} entries",
        history.visible_len(),
        history.len()
    );
}
