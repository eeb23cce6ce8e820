// Copyright 2025 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


mod commands;

use clap::{Parser, Subcommand};

use commands::{ChatArgs, ConfigArgs};
use hookchat::config::Config;
use hookchat::session::chat::run_interactive_session;

#[derive(Parser)]
#[command(name = "hookchat")]
#[command(version)]
#[command(about = "Chat with an n8n (or any workflow) webhook from your terminal")]
struct HookchatArgs {
	#[command(subcommand)]
	command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
	/// Start an interactive chat session (default)
	Chat(ChatArgs),

	/// Show or change the configuration file
	Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
	let args = HookchatArgs::parse();

	match args.command {
		Some(Commands::Config(config_args)) => {
			let config = Config::load_file_only()?;
			commands::config::execute(&config_args, config)
		}
		Some(Commands::Chat(chat_args)) => run_chat(&chat_args).await,
		None => run_chat(&ChatArgs::default()).await,
	}
}

async fn run_chat(args: &ChatArgs) -> Result<(), anyhow::Error> {
	let mut config = Config::load()?;
	args.apply(&mut config)?;
	run_interactive_session(config).await
}
