use tourdb_core::LeadForm;
use tourdb_sheets::{LeadOutcome, SheetsClient};

/// Submit an enquiry and report the outcome. A rejected submission exits
/// non-zero with the store's message, the same wording the form would show.
pub(crate) async fn run_lead(client: &SheetsClient, form: &LeadForm) -> anyhow::Result<()> {
    match client.submit_lead(form).await {
        LeadOutcome::Accepted => {
            println!("enquiry submitted; we'll get back to you shortly");
            Ok(())
        }
        LeadOutcome::Rejected(message) => anyhow::bail!("enquiry rejected: {message}"),
    }
}
