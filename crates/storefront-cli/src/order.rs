//! `order` subcommand: builds the dispatch chain from config and runs one
//! order through it.
//!
//! A terminal has no share sheet, so the share tier always reports
//! unsupported and falls through. The deep link is printed to stdout.

use std::time::Duration;

use clap::Args;
use reqwest::Client;
use storefront_core::{AppConfig, Order, WhatsAppContact};
use storefront_dispatch::{
    DeepLinkChannel, Delivery, Dispatcher, LinkOpener, RelayChannel, ShareChannel,
    UnsupportedShare,
};

#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Product name
    #[arg(long)]
    pub name: String,
    /// Listed price; omitted or "contact ..." leaves the price line out
    #[arg(long)]
    pub price: Option<String>,
    /// Image location, absolute or relative to the site URL
    #[arg(long)]
    pub image: String,
    /// Recipient override for this order
    #[arg(long)]
    pub phone: Option<String>,
    /// Relay endpoint (defaults to `STOREFRONT_RELAY_URL`; unset skips the relay)
    #[arg(long)]
    pub relay_url: Option<String>,
    /// Page URL images are resolved against (defaults to `STOREFRONT_SITE_URL`)
    #[arg(long)]
    pub site_url: Option<String>,
}

/// Prints the link instead of launching a browser.
struct StdoutOpener;

impl LinkOpener for StdoutOpener {
    fn open(&self, url: &str) {
        println!("{url}");
    }
}

pub(crate) fn build_dispatcher(
    contact: &WhatsAppContact,
    timeout_secs: u64,
    relay_url: Option<&str>,
    site_url: &str,
    opener: Box<dyn LinkOpener>,
) -> anyhow::Result<Dispatcher> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;

    let mut dispatcher = Dispatcher::new(
        site_url,
        Box::new(DeepLinkChannel::new(contact.clone(), opener)),
    );
    if let Some(url) = relay_url {
        dispatcher =
            dispatcher.with_channel(Box::new(RelayChannel::new(client.clone(), url, contact)?));
    }
    Ok(dispatcher.with_channel(Box::new(ShareChannel::new(
        client,
        Box::new(UnsupportedShare),
    ))))
}

pub(crate) async fn run_order(config: &AppConfig, args: OrderArgs) -> anyhow::Result<()> {
    let order = Order::new(&args.name, args.price.as_deref(), &args.image)?
        .with_recipient(args.phone.as_deref());

    let contact = WhatsAppContact::resolve(
        Some(&config.whatsapp.recipient_phone),
        config.whatsapp.qr_code.as_deref(),
    );
    let relay_url = args.relay_url.as_deref().or(config.relay_url.as_deref());
    let site_url = args.site_url.as_deref().unwrap_or(&config.site_url);

    let dispatcher = build_dispatcher(
        &contact,
        config.http_timeout_secs,
        relay_url,
        site_url,
        Box::new(StdoutOpener),
    )?;
    tracing::debug!(channels = ?dispatcher.channel_names(), "dispatch chain ready");

    match dispatcher.dispatch(order).await {
        Delivery::RelayConfirmed { message } => println!("{message}"),
        Delivery::Shared => println!("shared via native share sheet"),
        Delivery::DeepLinkOpened { .. } => {}
    }
    Ok(())
}
