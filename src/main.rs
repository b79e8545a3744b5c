use clap::Parser;
use dotenvy::dotenv;
use log::{error, info};
use masonry_intake::Result;
use masonry_intake::config::config;
use masonry_intake::model::draft::{LeadDraft, SiteVisit};
use masonry_intake::model::options::YesNo;
use masonry_intake::webhook::{LeadServices, WebhookClient};
use masonry_intake::wizard::Step;
use masonry_intake::wizard::controller::WizardController;
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser)]
#[command(name = "masonry-intake")]
#[command(about = "Walks a lead draft through the intake wizard and submits it")]
struct Cli {
    /// Lead draft as JSON
    draft: PathBuf,

    /// Catalog service ids to select (defaults to the first service)
    services: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenv().ok();

    pretty_env_logger::init();
    info!("Starting lead intake...");

    let draft: LeadDraft = serde_json::from_str(&std::fs::read_to_string(&cli.draft)?)?;

    let cfg = config();
    let mut wizard = WizardController::new(WebhookClient::new(cfg.clone()), cfg);
    wizard.load().await;
    if let Step::Error(reason) = wizard.step() {
        error!("Connection Issue: {}", reason);
        exit(1);
    }

    if cli.services.is_empty() {
        if let Some(first) = wizard.catalog().services.first().map(|s| s.id.clone()) {
            wizard.toggle_service(&first);
        }
    } else {
        for id in &cli.services {
            wizard.toggle_service(id);
        }
    }

    // The visit is answered on the scheduling step through its own handlers.
    let visit = draft.site_visit.clone();
    wizard.edit(|d| {
        *d = draft;
        d.site_visit = SiteVisit::default();
    });

    let mut scheduled = false;
    for _ in 0..5 {
        let step = match wizard.next().await {
            Ok(step) => step,
            Err(failure) => {
                error!("{}", failure);
                exit(1);
            }
        };
        if !wizard.errors().is_empty() {
            for (field, message) in wizard.errors() {
                error!("{}: {}", field, message);
            }
            exit(1);
        }
        match step {
            Step::Success => {
                if let Some(ack) = wizard.confirmation() {
                    println!("{}", ack.message);
                    if let Some(id) = &ack.project_id {
                        println!("Your ID is {}", id);
                    }
                }
                return Ok(());
            }
            Step::Scheduling if !scheduled => {
                answer_site_visit(&mut wizard, visit.clone()).await;
                scheduled = true;
            }
            _ => {}
        }
    }

    error!("intake stopped on {}", wizard.step().header());
    exit(1);
}

async fn answer_site_visit<S: LeadServices>(wizard: &mut WizardController<S>, visit: SiteVisit) {
    let Some(choice) = visit.want_visit else {
        return;
    };
    wizard.choose_site_visit(choice).await;
    if choice == YesNo::No {
        return;
    }

    let wanted = visit.time_block.as_ref().map(|b| b.display.clone());
    let block = wanted.or_else(|| wizard.time_blocks().first().cloned());
    if let Some(block) = block {
        wizard.select_time_block(&block);
    }
    if let Some(mode) = visit.attendance {
        wizard.set_attendance(mode);
        wizard.edit(|d| {
            d.site_visit.contact_method = visit.contact_method;
            d.site_visit.delegate = visit.delegate;
            d.site_visit.access_instructions = visit.access_instructions;
        });
    }
}
