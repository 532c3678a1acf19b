//! Interactive terminal client for a document-augmented chat server.
//!
//! # Usage
//!
//! ```bash
//! # Talk to a server on localhost:5000
//! docchat
//!
//! # Point at another server
//! docchat --base-url https://chat.example.com/
//!
//! # Allow uploads of any size and show request diagnostics
//! docchat --no-size-limit --verbose
//! ```
//!
//! # Commands
//!
//! - `/upload <path>` - Upload a document for the server to search
//! - `/refresh` - Clear the server session and start over
//! - `/help` - Show available commands
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use docchat::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatController, ClickTarget, LogCursor, ModalInput,
    PlainTextRenderer, Renderer, help_text, parse_command, parse_modal_input,
};
use docchat::{ChatClient, FileUpload};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("docchat [OPTIONS]");
    let config = ChatConfig::from(args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let client = ChatClient::with_options(config.base_url.clone(), config.timeout)?;
    let controller = ChatController::with_policy(client, config.upload_policy);
    let mut renderer = PlainTextRenderer::with_color(config.use_color);
    let mut cursor = LogCursor::new();
    let mut rl = DefaultEditor::new()?;

    println!("docchat ({})", controller.backend().base_url());
    println!("Type /help for commands, /quit to exit\n");

    loop {
        let modal_open = controller.with_view(|view| view.modal().is_open());
        let prompt = if modal_open {
            "[help] Enter to close: "
        } else {
            "> "
        };

        match rl.readline(prompt) {
            Ok(line) => {
                if modal_open {
                    match parse_modal_input(&line) {
                        ModalInput::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ModalInput::Click(target) => {
                            if !controller.click(target) {
                                renderer
                                    .print_info("Press Enter or type /close to close the help.");
                            }
                        }
                    }
                    continue;
                }

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Upload(path) => match FileUpload::from_path(&path).await {
                            Ok(file) => {
                                controller.handle_file_upload(Some(file)).await;
                            }
                            Err(err) => renderer.print_error(&err.to_string()),
                        },
                        ChatCommand::Refresh => {
                            // Failures are logged by the controller; the page stays as it is.
                            controller.refresh_session().await;
                        }
                        ChatCommand::Help => {
                            controller.open_modal(help_text());
                            if let Some(body) =
                                controller.with_view(|view| view.modal().body().map(String::from))
                            {
                                renderer.print_modal(&body);
                            }
                        }
                        ChatCommand::Close => {
                            controller.click(ClickTarget::CloseControl);
                        }
                        ChatCommand::Log => {
                            controller.with_view(|view| cursor.render_all(view, &mut renderer));
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                } else {
                    controller.set_input(line);
                    controller.submit_input().await;
                }

                controller.with_view(|view| cursor.render(view, &mut renderer));
            }
            Err(ReadlineError::Interrupted) => {
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}
