//! Statement aggregation and text rendering.

use tracing::{debug, instrument, trace};

use theater_core::{DomainError, DomainResult, ValueObject};
use theater_invoicing::{Invoice, Performance};
use theater_plays::{Play, PlayCatalog, PlayLookup};

use crate::config::PricingConfig;
use crate::credits::credits_for;
use crate::currency::usd;
use crate::pricing::amount_for;

/// Line terminator used for every statement line.
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Priced line item for one performance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub play_name: String,
    /// Amount owed in cents.
    pub amount: u64,
    pub audience: u32,
    pub volume_credits: u64,
}

impl ValueObject for StatementLine {}

/// Computed statement for one invoice. `Display` renders the text statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub customer: String,
    /// One entry per performance, in invoice order.
    pub lines: Vec<StatementLine>,
    /// Sum of line amounts, in cents.
    pub total_amount: u64,
    pub total_volume_credits: u64,
}

impl ValueObject for Statement {}

impl core::fmt::Display for Statement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Statement for {}{LINE_SEPARATOR}", self.customer)?;
        for line in &self.lines {
            write!(
                f,
                "  {}: {} ({} seats){LINE_SEPARATOR}",
                line.play_name,
                usd(line.amount),
                line.audience
            )?;
        }
        write!(f, "Amount owed is {}{LINE_SEPARATOR}", usd(self.total_amount))?;
        write!(f, "You earned {} credits{LINE_SEPARATOR}", self.total_volume_credits)
    }
}

/// Prices an invoice against a play lookup.
///
/// Holds only borrowed inputs and a copy of the config; every method is a pure
/// computation and any error aborts the whole statement.
#[derive(Debug)]
pub struct StatementPrinter<'a, L: PlayLookup + ?Sized = PlayCatalog> {
    invoice: &'a Invoice,
    plays: &'a L,
    config: PricingConfig,
}

impl<'a, L: PlayLookup + ?Sized> StatementPrinter<'a, L> {
    /// Printer using the reference pricing constants.
    pub fn new(invoice: &'a Invoice, plays: &'a L) -> Self {
        Self {
            invoice,
            plays,
            config: PricingConfig::default(),
        }
    }

    /// Printer using caller-supplied constants, validated up front.
    pub fn with_config(
        invoice: &'a Invoice,
        plays: &'a L,
        config: PricingConfig,
    ) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            invoice,
            plays,
            config,
        })
    }

    pub fn invoice(&self) -> &'a Invoice {
        self.invoice
    }

    pub fn plays(&self) -> &'a L {
        self.plays
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    fn play(&self, performance: &Performance) -> DomainResult<&'a Play> {
        L::require(self.plays, performance.play_id())
    }

    /// Amount owed for one performance, in cents.
    pub fn amount(&self, performance: &Performance) -> DomainResult<u64> {
        let genre = self.play(performance)?.kind()?;
        amount_for(genre, performance.audience(), &self.config)
    }

    /// Volume credits earned by one performance.
    pub fn volume_credits(&self, performance: &Performance) -> DomainResult<u64> {
        let genre = self.play(performance)?.kind()?;
        credits_for(genre, performance.audience(), &self.config)
    }

    /// Total amount owed across the invoice, in cents.
    pub fn total_amount(&self) -> DomainResult<u64> {
        Ok(self.statement_data()?.total_amount)
    }

    pub fn total_volume_credits(&self) -> DomainResult<u64> {
        Ok(self.statement_data()?.total_volume_credits)
    }

    /// Price every performance in invoice order and accumulate the totals.
    #[instrument(
        level = "debug",
        skip(self),
        fields(
            customer = %self.invoice.customer(),
            performances = self.invoice.performances().len(),
        ),
        err(level = "warn")
    )]
    pub fn statement_data(&self) -> DomainResult<Statement> {
        let mut lines = Vec::with_capacity(self.invoice.performances().len());
        let mut total_amount: u64 = 0;
        let mut total_volume_credits: u64 = 0;

        for performance in self.invoice.performances() {
            let play = self.play(performance)?;
            let genre = play.kind()?;
            let audience = performance.audience();

            let amount = amount_for(genre, audience, &self.config)?;
            let volume_credits = credits_for(genre, audience, &self.config)?;

            trace!(
                play_id = %performance.play_id(),
                %genre,
                audience,
                amount,
                volume_credits,
                "priced performance"
            );

            total_amount = total_amount
                .checked_add(amount)
                .ok_or_else(|| DomainError::invariant("statement total overflow"))?;
            total_volume_credits = total_volume_credits
                .checked_add(volume_credits)
                .ok_or_else(|| DomainError::invariant("volume credit overflow"))?;

            lines.push(StatementLine {
                play_name: play.name().to_string(),
                amount,
                audience,
                volume_credits,
            });
        }

        debug!(total_amount, total_volume_credits, "statement computed");

        Ok(Statement {
            customer: self.invoice.customer().to_string(),
            lines,
            total_amount,
            total_volume_credits,
        })
    }

    /// Render the text statement: header, one line per performance, then the
    /// amount owed and credits earned.
    pub fn statement(&self) -> DomainResult<String> {
        Ok(self.statement_data()?.to_string())
    }
}

/// Render the statement for `invoice` with the reference pricing constants.
pub fn render<L: PlayLookup + ?Sized>(invoice: &Invoice, plays: &L) -> DomainResult<String> {
    StatementPrinter::new(invoice, plays).statement()
}

/// Render the statement for `invoice` with caller-supplied constants.
pub fn render_with<L: PlayLookup + ?Sized>(
    invoice: &Invoice,
    plays: &L,
    config: PricingConfig,
) -> DomainResult<String> {
    StatementPrinter::with_config(invoice, plays, config)?.statement()
}
