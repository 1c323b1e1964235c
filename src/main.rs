// ==========================================
// Chor-Jahresplaner - Kommandozeilen-Einstieg
// ==========================================
// Befehle:
//   chorplan generate <jahr> [datenordner] [mitglieder.csv] [ausgabedatei]
//   chorplan validate <datei> <jahr>
// Ausgabe: Plan bzw. Prüfbericht als JSON auf stdout
// ==========================================

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use chorplan::{
    CsvMemberStore, InMemoryMemberStore, JsonYearStore, MemberStore, ScheduleAssembler,
    ScheduleConfig, ScheduleValidator,
};

#[tokio::main]
async fn main() -> Result<()> {
    chorplan::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", chorplan::APP_NAME);
    tracing::info!("Version: {}", chorplan::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("generate") => generate(&args[1..]).await,
        Some("validate") => validate(&args[1..]),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

/// Jahresplan erzeugen und als JSON ausgeben
async fn generate(args: &[String]) -> Result<()> {
    let year: i32 = args
        .first()
        .context("Zieljahr fehlt (chorplan generate <jahr>)")?
        .parse()
        .context("Zieljahr ist keine ganze Zahl")?;

    let data_dir = args
        .get(1)
        .map(PathBuf::from)
        .or_else(default_data_dir)
        .context("Kein Datenordner angegeben und kein Systemverzeichnis verfügbar")?;
    tracing::info!(ordner = %data_dir.display(), "Verwende Datenordner");

    let members_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir.join("mitglieder.csv"));

    // Fehlende Mitgliederliste ist kein Fehler: Plan ohne Geburtstage
    let member_store: Arc<dyn MemberStore> = if members_path.exists() {
        Arc::new(CsvMemberStore::new(members_path))
    } else {
        tracing::warn!(pfad = %members_path.display(), "Keine Mitgliederliste, Plan ohne Geburtstage");
        Arc::new(InMemoryMemberStore::default())
    };

    let config = ScheduleConfig::load_or_default(&data_dir.join("konfiguration.json"))?;
    let assembler = ScheduleAssembler::new(
        Arc::new(JsonYearStore::new(data_dir)),
        member_store,
        config,
    );

    let schedule = assembler.generate_yearly_schedule(year).await?;
    tracing::info!(jahr = year, eintraege = schedule.len(), "Plan erzeugt");

    let json = serde_json::to_string_pretty(&schedule)?;
    match args.get(3) {
        Some(out) => {
            std::fs::write(out, json).with_context(|| format!("Ausgabedatei unschreibbar: {}", out))?;
            tracing::info!(datei = %out, "Plan exportiert");
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Jahresdatei gegen den Formatvertrag prüfen
fn validate(args: &[String]) -> Result<()> {
    let path = args
        .first()
        .context("Dateipfad fehlt (chorplan validate <datei> <jahr>)")?;
    let year: i32 = args
        .get(1)
        .context("Zieljahr fehlt (chorplan validate <datei> <jahr>)")?
        .parse()
        .context("Zieljahr ist keine ganze Zahl")?;

    let text = std::fs::read_to_string(path).with_context(|| format!("Datei unlesbar: {}", path))?;
    let raw: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("Kein JSON: {}", path))?;

    let report = ScheduleValidator::validate(&raw, year);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.is_valid {
        bail!("Jahresdaten ungültig ({} Fehler)", report.errors.len());
    }
    Ok(())
}

fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("chorplan"))
}

fn print_usage() {
    println!("Verwendung:");
    println!("  chorplan generate <jahr> [datenordner] [mitglieder.csv] [ausgabedatei]");
    println!("  chorplan validate <datei> <jahr>");
}
