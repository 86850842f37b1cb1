use crate::app::{action::Action, command::Command};
use crate::domain::brand::BrandDirectory;
use crate::services::{CompanySearchService, PaletteResolver};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs a command's remote call on its own task and reports back through
/// `tx`. Never blocks the caller.
pub fn handle_command(command: Command, directory: Arc<dyn BrandDirectory>, tx: mpsc::Sender<Action>) {
    match command {
        Command::Search(invocation) => {
            let service = CompanySearchService::new(directory);
            tokio::spawn(async move {
                let result = service.search_companies(&invocation.term).await;
                let _ = tx
                    .send(Action::SearchCompleted(invocation.session, result))
                    .await;
            });
        }
        Command::ResolvePalette {
            ticket,
            company,
            previous,
        } => {
            let resolver = PaletteResolver::new(directory);
            tokio::spawn(async move {
                let _ = tx.send(Action::PaletteResolving(ticket)).await;
                let outcome = resolver.resolve_palette(&company.logo, &previous).await;
                let _ = tx
                    .send(Action::PaletteResolved(ticket, Box::new(company), outcome))
                    .await;
            });
        }
    }
}
