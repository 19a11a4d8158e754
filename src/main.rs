use anyhow::Context;
use clap::Parser;
use section_toggler::config::{Action, CliArgs};
use section_toggler::utils::{logger, validation::Validate};
use section_toggler::{
    JsonFileStore, Toggler, TogglerConfig, TogglerError, TogglerSnapshot, UrlNavigation,
};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting section-toggler");
    tracing::debug!("CLI args: {:?}", args);

    // 載入 TOML 配置
    let config = match TogglerConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let address = match args.url.as_deref().or(config.page_address()) {
        Some(address) => address.to_string(),
        None => fail(&TogglerError::MissingConfigError {
            field: "--url or page.address".to_string(),
        }),
    };

    let navigation = UrlNavigation::parse(&address).unwrap_or_else(|e| fail(&e));
    // 狀態檔壞掉時只是不記憶，不中斷載入
    let store = JsonFileStore::open_or_unavailable(&args.store);
    if store.is_available() {
        tracing::debug!("💾 Remembering state in {}", store.path().display());
    }
    let options = config.to_options().unwrap_or_else(|e| fail(&e));
    let page = config.build_page();

    tracing::info!("📄 Loading {}", navigation.url());
    let mut toggler = Toggler::new(options, page, store, &navigation);

    match args.action.unwrap_or(Action::Show) {
        Action::Show => {}
        Action::Toggle { id } => toggler.toggle(&id),
        Action::Select { id } => toggler.expand_uniquely(&id),
        Action::ExpandAll => toggler.expand_all(),
        Action::CollapseAll => toggler.collapse_all(),
    }

    let snapshot = toggler.snapshot();
    if args.json {
        let json = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;
        println!("{}", json);
    } else {
        print_table(&snapshot);
    }

    Ok(())
}

fn fail(e: &TogglerError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn print_table(snapshot: &TogglerSnapshot) {
    if snapshot.sections.is_empty() {
        println!("(no sections)");
    }
    for section in &snapshot.sections {
        let marker = if section.shown { "▾ shown " } else { "▸ hidden" };
        println!("{}  {}", marker, section.id);
    }
    println!();
    println!("all expanded: {}", snapshot.all_expanded);
    println!(
        "remembered:   {}",
        snapshot.remembered.as_deref().unwrap_or("(nothing)")
    );
}
