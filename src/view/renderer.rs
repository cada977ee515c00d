use crate::domain::order::{Delivery, Item, Order, Payment};

use super::format::{status_label, DateFormatter};
use super::surface::{regions, DisplaySurface, ItemView, ListEntry};

pub const NO_ITEMS_PLACEHOLDER: &str = "No items in order";

/// Maps an [`Order`] onto the result page regions. Never mutates the order.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    dates: DateFormatter,
}

impl Renderer {
    pub fn new(dates: DateFormatter) -> Self {
        Self { dates }
    }

    /// Render `order` and the request timing.
    ///
    /// Absent delivery or payment leaves those regions untouched. The item
    /// list is rebuilt from scratch on every call, so rendering the same
    /// order twice yields the same page.
    pub fn render<S: DisplaySurface>(&self, surface: &mut S, order: &Order, execution_time_ms: u64) {
        self.render_header(surface, order);
        if let Some(delivery) = &order.delivery {
            render_delivery(surface, delivery);
        }
        if let Some(payment) = &order.payment {
            self.render_payment(surface, payment);
        }
        render_items(surface, &order.items);
        render_execution_time(surface, execution_time_ms);
    }

    fn render_header<S: DisplaySurface>(&self, surface: &mut S, order: &Order) {
        surface.set_region_text(regions::ORDER_UID, &order.order_uid);
        surface.set_region_text(regions::TRACK_NUMBER, &order.track_number);
        surface.set_region_text(regions::ENTRY, &order.entry);
        surface.set_region_text(regions::LOCALE, &order.locale);
        surface.set_region_text(
            regions::INTERNAL_SIGNATURE,
            order.internal_signature.as_deref().unwrap_or_default(),
        );
        surface.set_region_text(regions::CUSTOMER_ID, &order.customer_id);
        surface.set_region_text(regions::DELIVERY_SERVICE, &order.delivery_service);
        surface.set_region_text(regions::SHARDKEY, &order.shardkey);
        surface.set_region_text(regions::SM_ID, &order.sm_id.to_string());
        surface.set_region_text(regions::DATE_CREATED, &self.dates.format_date(&order.date_created));
        surface.set_region_text(regions::OOF_SHARD, &order.oof_shard);
    }

    fn render_payment<S: DisplaySurface>(&self, surface: &mut S, payment: &Payment) {
        surface.set_region_text(regions::PAYMENT_TRANSACTION, &payment.transaction);
        surface.set_region_text(
            regions::PAYMENT_REQUEST_ID,
            payment.request_id.as_deref().unwrap_or_default(),
        );
        surface.set_region_text(regions::PAYMENT_CURRENCY, &payment.currency);
        surface.set_region_text(regions::PAYMENT_PROVIDER, &payment.provider);
        surface.set_region_text(regions::PAYMENT_AMOUNT, &payment.amount.to_string());
        surface.set_region_text(
            regions::PAYMENT_DT,
            &self.dates.format_epoch_seconds(Some(payment.payment_dt)),
        );
        surface.set_region_text(regions::PAYMENT_BANK, &payment.bank);
        surface.set_region_text(regions::PAYMENT_DELIVERY_COST, &payment.delivery_cost.to_string());
        surface.set_region_text(regions::PAYMENT_GOODS_TOTAL, &payment.goods_total.to_string());
        surface.set_region_text(regions::PAYMENT_CUSTOM_FEE, &payment.custom_fee.to_string());
    }
}

fn render_delivery<S: DisplaySurface>(surface: &mut S, delivery: &Delivery) {
    surface.set_region_text(regions::DELIVERY_NAME, &delivery.name);
    surface.set_region_text(regions::DELIVERY_PHONE, &delivery.phone);
    surface.set_region_text(regions::DELIVERY_ZIP, &delivery.zip);
    surface.set_region_text(regions::DELIVERY_CITY, &delivery.city);
    surface.set_region_text(regions::DELIVERY_ADDRESS, &delivery.address);
    surface.set_region_text(regions::DELIVERY_REGION, &delivery.region);
    surface.set_region_text(regions::DELIVERY_EMAIL, &delivery.email);
}

fn render_items<S: DisplaySurface>(surface: &mut S, items: &[Item]) {
    surface.set_region_text(regions::ITEMS_COUNT, &items.len().to_string());
    surface.clear_list(regions::ITEMS_LIST);

    if items.is_empty() {
        surface.append_list_item(
            regions::ITEMS_LIST,
            ListEntry::Placeholder(NO_ITEMS_PLACEHOLDER.to_string()),
        );
        return;
    }

    for (index, item) in items.iter().enumerate() {
        surface.append_list_item(regions::ITEMS_LIST, ListEntry::Item(item_view(index, item)));
    }
}

/// Card for the item at zero-based `index`.
pub fn item_view(index: usize, item: &Item) -> ItemView {
    ItemView {
        title: format!("Item {}", index + 1),
        fields: vec![
            ("chrt_id", item.chrt_id.to_string()),
            ("track_number", item.track_number.clone()),
            ("price", item.price.to_string()),
            ("rid", item.rid.clone()),
            ("name", item.name.clone()),
            ("sale", format!("{}%", item.sale)),
            ("size", item.size.clone()),
            ("total_price", item.total_price.to_string()),
            ("nm_id", item.nm_id.to_string()),
            ("brand", item.brand.clone()),
            ("status", status_label(item.status)),
        ],
    }
}

fn render_execution_time<S: DisplaySurface>(surface: &mut S, execution_time_ms: u64) {
    if surface.ensure_region(regions::EXECUTION_TIME) {
        log::debug!("Created region '{}'", regions::EXECUTION_TIME);
    }
    surface.set_region_text(
        regions::EXECUTION_TIME,
        &format!("Request completed in {} ms", execution_time_ms),
    );
}
