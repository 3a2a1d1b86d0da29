use anyhow::Context;
use clap::Parser;
use move_manifest::app::manifest::parse_items;
use move_manifest::config::Command;
use move_manifest::core::render::UNASSIGNED_ROOM;
use move_manifest::core::ConfigProvider;
use move_manifest::utils::validation::{parse_box_number, parse_label_width, parse_max_height, Validate};
use move_manifest::utils::{error::ManifestError, logger};
use move_manifest::{BoxId, CliConfig, LabelSelection, LabelSheet, LocalStorage, Manifest, ManifestConfig};
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "move-manifest.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = load_config(&cli)?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let storage = LocalStorage::new(config.data_dir().to_string());
    let mut manifest = Manifest::open(storage, &config)
        .await
        .with_context(|| format!("failed to open box data in {}", config.data_dir()))?;

    if let Err(e) = run(&cli.command, &mut manifest, &config).await {
        if let Some(manifest_error) = e.downcast_ref::<ManifestError>() {
            tracing::error!("❌ {}", manifest_error);
            exit_with(manifest_error);
        }
        return Err(e);
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> anyhow::Result<ManifestConfig> {
    let mut config = match &cli.config {
        Some(path) => ManifestConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => ManifestConfig::from_file(DEFAULT_CONFIG_FILE)
            .with_context(|| format!("failed to load config file '{}'", DEFAULT_CONFIG_FILE))?,
        None => ManifestConfig::default(),
    };

    if let Some(data_dir) = &cli.data_dir {
        tracing::debug!("🔧 Data directory overridden to: {}", data_dir);
        config.storage.data_dir = data_dir.clone();
    }

    Ok(config)
}

async fn run(command: &Command, manifest: &mut Manifest<LocalStorage>, config: &ManifestConfig) -> anyhow::Result<()> {
    match command {
        Command::List => {
            for moving_box in manifest.boxes() {
                let room = if moving_box.room.is_empty() {
                    UNASSIGNED_ROOM
                } else {
                    moving_box.room.as_str()
                };
                println!("Box {} • {}  [{}]", moving_box.number, room, moving_box.id);
                for item in &moving_box.items {
                    println!("    - {}", item);
                }
            }
            println!("{} boxes, {} items", manifest.boxes().len(), manifest.total_items());
        }
        Command::Add { number, room, items } => {
            let number = match number {
                Some(text) => parse_box_number(text)?,
                None => manifest.next_box_number(),
            };
            let items: Vec<String> = items.iter().flat_map(|text| parse_items(text)).collect();
            let id = manifest.add_box(number, room, &items).await?;
            println!("Box added. ({})", id);
        }
        Command::Remove { id } => {
            let removed = manifest.remove_box(&BoxId::from(id.as_str())).await?;
            println!("Box {} removed.", removed.number);
        }
        Command::Renumber { id, number } => {
            let number = parse_box_number(number)?;
            if manifest.renumber(&BoxId::from(id.as_str()), number).await? {
                println!("Box number updated.");
            }
        }
        Command::AddItem { id, item } => {
            if manifest.add_item(&BoxId::from(id.as_str()), item).await? {
                println!("Item added.");
            }
        }
        Command::RemoveItem { id, index } => {
            if manifest.remove_item(&BoxId::from(id.as_str()), *index).await?.is_some() {
                println!("Item removed.");
            }
        }
        Command::Export { output } => {
            let csv = manifest.export_csv();
            let target = output.clone().unwrap_or_else(|| config.export.filename.clone());
            if target == "-" {
                println!("{}", csv);
            } else {
                tokio::fs::write(&target, csv)
                    .await
                    .with_context(|| format!("failed to write {}", target))?;
                println!("CSV exported to {}.", target);
            }
        }
        Command::Import { file } => {
            let content = tokio::fs::read_to_string(file)
                .await
                .with_context(|| format!("failed to read {}", file))?;
            let count = manifest.import_csv(&content).await?;
            println!("Imported {} boxes from CSV.", count);
        }
        Command::Labels {
            width,
            max_height,
            only,
            exclude,
            output,
        } => {
            let width_cm = match width {
                Some(text) => {
                    let width_cm = parse_label_width(text)?;
                    manifest.remember_label_width(width_cm).await?;
                    width_cm
                }
                None => manifest.label_width().await?,
            };

            let mut sheet = LabelSheet::new(width_cm);
            let max_height_cm = match max_height {
                Some(text) => Some(parse_max_height(text)?),
                None => config.max_label_height_cm(),
            };
            if let Some(max_height_cm) = max_height_cm {
                sheet = sheet.with_max_height(max_height_cm);
            }

            let only: Vec<BoxId> = only.iter().map(|id| BoxId::from(id.as_str())).collect();
            let selection = LabelSelection::only(manifest.boxes(), &only)
                .without(exclude.iter().map(|id| BoxId::from(id.as_str())));
            let generated = manifest.generate_labels(&selection, &sheet)?;

            tokio::fs::write(output, &generated.html)
                .await
                .with_context(|| format!("failed to write {}", output))?;
            println!("{} ({} page layout, saved to {})", generated.message, generated.orientation, output);
        }
    }

    Ok(())
}

fn exit_with(error: &ManifestError) -> ! {
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());

    let exit_code = match error {
        ManifestError::IoError(_) | ManifestError::SerializationError(_) => 3,
        ManifestError::ConfigValidationError { .. } | ManifestError::InvalidConfigValueError { .. } => 2,
        _ => 1,
    };
    std::process::exit(exit_code);
}
