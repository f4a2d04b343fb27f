use crate::api::{PlentyApi, PlentyClient};
use crate::cli::main_types::{AuthCommands, Commands, ConfigCommands, ExportArgs, ScopeArg};
use crate::core::auth::LoginInput;
use crate::core::export::{AttributeDefinition, Dataset, ExportParams, ExportPipeline, Scope};
use crate::display::csv;
use crate::display::table::TableDisplay;
use crate::error::{CliError, ConfigError, DisplayError, ExportError};
use crate::storage::config::Config;
use crate::storage::credentials::Credentials;
use crate::utils::input::{prompt_id, prompt_line, prompt_required};
use crate::utils::logging::{log_warning, print_verbose};
use crate::utils::validation::validate_url;
use std::fs::File;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Option<Config>,
    config_path: Option<PathBuf>,
    verbose: bool,
}

impl Dispatcher {
    pub fn new(config: Option<Config>, config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            config,
            config_path,
            verbose,
        }
    }

    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub async fn dispatch(&mut self, command: Commands) -> crate::Result<()> {
        match command {
            Commands::Auth { command } => self.handle_auth_command(command).await,
            Commands::Config { command } => self.handle_config_command(command),
            Commands::Export(args) => self.handle_export_command(args).await,
        }
    }

    async fn handle_auth_command(&mut self, command: AuthCommands) -> crate::Result<()> {
        match command {
            AuthCommands::Login => {
                self.log_verbose("Attempting auth login command");
                let input = LoginInput::collect()?;
                input.validate()?;

                let config = self.ensure_config()?;
                let mut client = PlentyClient::new(config.base_url.clone())?;
                client.login(&input.username, &input.password).await?;

                Credentials::store(&input.username, &input.password)?;
                println!("✅ Successfully logged in as {}", input.username);
                println!("Connected to: {}", config.base_url);
                Ok(())
            }
            AuthCommands::Logout => {
                self.log_verbose("Attempting auth logout command");
                Credentials::clear()?;
                println!("✅ Removed stored credentials");
                Ok(())
            }
            AuthCommands::Status => {
                self.log_verbose("Attempting auth status command");

                println!("Authentication Status:");
                println!("=====================");

                let credentials = Credentials::load()?;
                if credentials.is_complete() {
                    println!("Credentials: stored in the system keyring");
                } else {
                    println!("Credentials: (not set), use 'pax-cli auth login'");
                }

                match &self.config {
                    Some(config) => println!("Backend: {}", config.base_url),
                    None => println!("Backend: (not configured)"),
                }

                Ok(())
            }
        }
    }

    fn handle_config_command(&mut self, command: ConfigCommands) -> crate::Result<()> {
        match command {
            ConfigCommands::Show => {
                self.log_verbose("Attempting config show command");

                println!("Current Configuration:");
                println!("=====================");

                match &self.config {
                    Some(config) => {
                        println!("Base URL: {}", config.base_url);
                        println!("Primary market: {}", config.primary_market_id);
                        println!("Alternative market: {}", config.alternative_market_id);
                        if config.attribute_ids.is_empty() {
                            println!("Attributes: (chosen on the next export)");
                        } else {
                            let ids = config
                                .attribute_ids
                                .iter()
                                .map(u32::to_string)
                                .collect::<Vec<_>>()
                                .join(", ");
                            println!("Attributes: {}", ids);
                        }
                    }
                    None => println!("  No configuration found, run an export to create one"),
                }

                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                self.log_verbose(&format!(
                    "Attempting config set - key: {}, value: {}",
                    key, value
                ));

                let mut config = self.ensure_config()?;
                match key.as_str() {
                    "base_url" => {
                        validate_url(&value)?;
                        config.base_url = value;
                    }
                    "primary_market_id" => config.primary_market_id = parse_id(&key, &value)?,
                    "alternative_market_id" => {
                        config.alternative_market_id = parse_id(&key, &value)?
                    }
                    "attribute_ids" => config.attribute_ids = parse_id_list(&value)?,
                    _ => {
                        return Err(ConfigError::InvalidValue {
                            field: key,
                            value,
                            reason: "unknown field".to_string(),
                        }
                        .into());
                    }
                }

                config.save(self.config_path.clone())?;
                self.config = Some(config);
                println!("✅ Configuration updated");
                Ok(())
            }
        }
    }

    async fn handle_export_command(&mut self, args: ExportArgs) -> crate::Result<()> {
        args.validate()?;
        let mut config = self.ensure_config()?;

        let mut client = PlentyClient::new(config.base_url.clone())?;
        let credentials = Credentials::load()?;
        let (username, password) = match credentials.pair() {
            Some((user, pass)) => (user.to_string(), pass.to_string()),
            None => {
                println!("No stored credentials, please log in.");
                let input = LoginInput::collect()?;
                input.validate()?;
                Credentials::store(&input.username, &input.password)?;
                (input.username, input.password)
            }
        };
        client.login(&username, &password).await?;
        self.log_verbose("Login succeeded");

        let scope = build_scope(&args, &client).await?;

        let pipeline = ExportPipeline::new(&client);
        let catalog = pipeline.attribute_catalog().await?;

        if config.attribute_ids.is_empty() && !catalog.is_empty() {
            config.attribute_ids = choose_attributes(&catalog)?;
            config.save(self.config_path.clone())?;
            self.config = Some(config.clone());
        }

        let params = ExportParams {
            scope,
            lang: args.lang.code().to_string(),
            selected_attribute_ids: config.attribute_ids.clone(),
            primary_market_id: config.primary_market_id,
            alternative_market_id: config.alternative_market_id,
        };
        let dataset = pipeline.run(&catalog, &params).await?;

        self.write_output(&args, &scope, &dataset)
    }

    /// Returns the loaded configuration, running the interactive first-run
    /// setup when none exists yet.
    fn ensure_config(&mut self) -> crate::Result<Config> {
        if let Some(config) = &self.config {
            return Ok(config.clone());
        }

        println!("No configuration found, setting up a new one.");
        let base_url = loop {
            let url = prompt_required("Base PlentyMarkets URL (Setup->API)")?;
            match validate_url(&url) {
                Ok(()) => break url,
                Err(err) => println!("{}", err),
            }
        };
        let primary_market_id = prompt_id("ID of the primary market (amazon DE)")?;
        let alternative_market_id = prompt_id("ID of the secondary market")?;

        let config = Config {
            base_url,
            attribute_ids: Vec::new(),
            primary_market_id,
            alternative_market_id,
        };
        config.save(self.config_path.clone())?;
        self.config = Some(config.clone());
        Ok(config)
    }

    fn write_output(
        &self,
        args: &ExportArgs,
        scope: &Scope,
        dataset: &Dataset,
    ) -> crate::Result<()> {
        if args.stdout && args.scope != ScopeArg::All {
            let display = TableDisplay::new().with_colors(atty::is(atty::Stream::Stdout));
            println!("{}", display.render_dataset(dataset));
            return Ok(());
        }

        if args.stdout {
            log_warning("scope=all always writes a file");
        }

        let path = match &args.output {
            Some(path) => path.clone(),
            None => PathBuf::from(csv::timestamped_filename(scope.label())),
        };
        let mut file = File::create(&path).map_err(|source| DisplayError::OutputIo {
            path: path.display().to_string(),
            source,
        })?;
        csv::write_csv(dataset, &mut file).map_err(|source| DisplayError::OutputIo {
            path: path.display().to_string(),
            source,
        })?;
        println!("Wrote {} rows to {}", dataset.len(), path.display());
        Ok(())
    }
}

/// Resolve the CLI scope arguments; a variation scope needs its owning item
/// looked up first.
async fn build_scope(args: &ExportArgs, api: &dyn PlentyApi) -> crate::Result<Scope> {
    match args.scope {
        ScopeArg::All => Ok(Scope::All),
        ScopeArg::Item => {
            let item = args.item.ok_or_else(|| {
                CliError::InvalidArguments("The scope=item option requires: [-i/--item]".to_string())
            })?;
            Ok(Scope::Item(item))
        }
        ScopeArg::Variation => {
            let variation = args.variation.ok_or_else(|| {
                CliError::InvalidArguments("The scope=variation option requires: [--var]".to_string())
            })?;
            let item = api
                .item_id_for_variation(variation)
                .await
                .ok_or(ExportError::VariationNotFound { variation })?;
            Ok(Scope::Variation { item, variation })
        }
    }
}

/// Lettered attribute chooser; the answer is persisted to the configuration
/// afterwards so the next export skips the question.
fn choose_attributes(catalog: &[AttributeDefinition]) -> crate::Result<Vec<u32>> {
    println!("Found the following plenty attributes, choose by letter:");
    let choices = &catalog[..catalog.len().min(26)];
    if catalog.len() > choices.len() {
        log_warning("only the first 26 attributes can be chosen interactively");
    }
    for (index, def) in choices.iter().enumerate() {
        println!("({}). {} - ID: {}", letter_for(index), def.name, def.id);
    }

    loop {
        let choice = prompt_line(">>")?;
        if let Some(ids) = parse_choice(&choice, choices) {
            return Ok(ids);
        }
        println!(
            "Please answer with letters between a and {}.",
            letter_for(choices.len().saturating_sub(1))
        );
    }
}

fn letter_for(index: usize) -> char {
    char::from(b'a' + index as u8)
}

/// Translate a letter sequence like `ac` into attribute ids; `None` for an
/// empty answer or any letter outside the listed range.
fn parse_choice(choice: &str, catalog: &[AttributeDefinition]) -> Option<Vec<u32>> {
    if choice.is_empty() {
        return None;
    }

    let mut ids = Vec::new();
    for letter in choice.chars() {
        let index = (letter as usize).checked_sub('a' as usize)?;
        ids.push(catalog.get(index)?.id);
    }
    Some(ids)
}

fn parse_id(field: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: "not a numeric id".to_string(),
    })
}

fn parse_id_list(value: &str) -> Result<Vec<u32>, ConfigError> {
    value
        .split(',')
        .map(|part| {
            part.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                field: "attribute_ids".to_string(),
                value: value.to_string(),
                reason: "expected comma-separated numeric ids".to_string(),
            })
        })
        .collect()
}
