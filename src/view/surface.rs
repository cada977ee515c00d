use std::collections::BTreeMap;

/// Region ids of the result page.
pub mod regions {
    pub const ORDER_UID: &str = "orderUid";
    pub const TRACK_NUMBER: &str = "trackNumber";
    pub const ENTRY: &str = "entry";
    pub const LOCALE: &str = "locale";
    pub const INTERNAL_SIGNATURE: &str = "internalSignature";
    pub const CUSTOMER_ID: &str = "customerId";
    pub const DELIVERY_SERVICE: &str = "deliveryService";
    pub const SHARDKEY: &str = "shardkey";
    pub const SM_ID: &str = "smId";
    pub const DATE_CREATED: &str = "dateCreated";
    pub const OOF_SHARD: &str = "oofShard";

    pub const DELIVERY_NAME: &str = "deliveryName";
    pub const DELIVERY_PHONE: &str = "deliveryPhone";
    pub const DELIVERY_ZIP: &str = "deliveryZip";
    pub const DELIVERY_CITY: &str = "deliveryCity";
    pub const DELIVERY_ADDRESS: &str = "deliveryAddress";
    pub const DELIVERY_REGION: &str = "deliveryRegion";
    pub const DELIVERY_EMAIL: &str = "deliveryEmail";

    pub const PAYMENT_TRANSACTION: &str = "paymentTransaction";
    pub const PAYMENT_REQUEST_ID: &str = "paymentRequestId";
    pub const PAYMENT_CURRENCY: &str = "paymentCurrency";
    pub const PAYMENT_PROVIDER: &str = "paymentProvider";
    pub const PAYMENT_AMOUNT: &str = "paymentAmount";
    pub const PAYMENT_DT: &str = "paymentDt";
    pub const PAYMENT_BANK: &str = "paymentBank";
    pub const PAYMENT_DELIVERY_COST: &str = "paymentDeliveryCost";
    pub const PAYMENT_GOODS_TOTAL: &str = "paymentGoodsTotal";
    pub const PAYMENT_CUSTOM_FEE: &str = "paymentCustomFee";

    pub const ITEMS_LIST: &str = "itemsList";
    pub const ITEMS_COUNT: &str = "itemsCount";
    /// Created on first use, not part of the static markup.
    pub const EXECUTION_TIME: &str = "execution-time";

    pub const LOADING: &str = "loading";
    pub const ERROR: &str = "error";
    pub const ERROR_MESSAGE: &str = "errorMessage";
    pub const RESULT: &str = "result";
}

/// A labelled group of text regions, in page order.
pub struct Section {
    pub title: &'static str,
    pub fields: &'static [(&'static str, &'static str)],
}

pub const SECTIONS: &[Section] = &[
    Section {
        title: "Order",
        fields: &[
            (regions::ORDER_UID, "order_uid"),
            (regions::TRACK_NUMBER, "track_number"),
            (regions::ENTRY, "entry"),
            (regions::LOCALE, "locale"),
            (regions::INTERNAL_SIGNATURE, "internal_signature"),
            (regions::CUSTOMER_ID, "customer_id"),
            (regions::DELIVERY_SERVICE, "delivery_service"),
            (regions::SHARDKEY, "shardkey"),
            (regions::SM_ID, "sm_id"),
            (regions::DATE_CREATED, "date_created"),
            (regions::OOF_SHARD, "oof_shard"),
        ],
    },
    Section {
        title: "Delivery",
        fields: &[
            (regions::DELIVERY_NAME, "name"),
            (regions::DELIVERY_PHONE, "phone"),
            (regions::DELIVERY_ZIP, "zip"),
            (regions::DELIVERY_CITY, "city"),
            (regions::DELIVERY_ADDRESS, "address"),
            (regions::DELIVERY_REGION, "region"),
            (regions::DELIVERY_EMAIL, "email"),
        ],
    },
    Section {
        title: "Payment",
        fields: &[
            (regions::PAYMENT_TRANSACTION, "transaction"),
            (regions::PAYMENT_REQUEST_ID, "request_id"),
            (regions::PAYMENT_CURRENCY, "currency"),
            (regions::PAYMENT_PROVIDER, "provider"),
            (regions::PAYMENT_AMOUNT, "amount"),
            (regions::PAYMENT_DT, "payment_dt"),
            (regions::PAYMENT_BANK, "bank"),
            (regions::PAYMENT_DELIVERY_COST, "delivery_cost"),
            (regions::PAYMENT_GOODS_TOTAL, "goods_total"),
            (regions::PAYMENT_CUSTOM_FEE, "custom_fee"),
        ],
    },
];

/// The visibility-toggled regions of the result page.
pub const MODE_REGIONS: &[&str] = &[regions::LOADING, regions::ERROR, regions::RESULT];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub title: String,
    pub fields: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Placeholder(String),
    Item(ItemView),
}

/// The rendering surface the renderer and page controller write to.
pub trait DisplaySurface {
    /// Replace the text of `region`. Unknown regions are ignored.
    fn set_region_text(&mut self, region: &str, text: &str);

    fn set_region_visible(&mut self, region: &str, visible: bool);

    /// Remove every entry of the list `container`.
    fn clear_list(&mut self, container: &str);

    fn append_list_item(&mut self, container: &str, entry: ListEntry);

    /// Register `region` if it does not exist yet. Returns `true` when this
    /// call created it.
    fn ensure_region(&mut self, region: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionState {
    pub text: String,
    pub visible: bool,
}

/// In-memory page. Holds the region registry for one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    regions: BTreeMap<String, RegionState>,
    lists: BTreeMap<String, Vec<ListEntry>>,
}

impl MemorySurface {
    /// A result page with every static region registered and all mode
    /// regions hidden.
    pub fn new() -> Self {
        let mut surface = Self {
            regions: BTreeMap::new(),
            lists: BTreeMap::new(),
        };
        let static_regions = SECTIONS
            .iter()
            .flat_map(|s| s.fields.iter().map(|(id, _)| *id))
            .chain([regions::ITEMS_COUNT, regions::ERROR_MESSAGE]);
        for id in static_regions {
            surface.register(id, true);
        }
        for id in MODE_REGIONS {
            surface.register(id, false);
        }
        surface.lists.insert(regions::ITEMS_LIST.to_string(), Vec::new());
        surface
    }

    fn register(&mut self, id: &str, visible: bool) {
        self.regions.insert(
            id.to_string(),
            RegionState {
                text: String::new(),
                visible,
            },
        );
    }

    pub fn region(&self, id: &str) -> Option<&RegionState> {
        self.regions.get(id)
    }

    /// Text of `id`, or `None` when the region does not exist.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(|r| r.text.as_str())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.regions.get(id).is_some_and(|r| r.visible)
    }

    pub fn list(&self, container: &str) -> &[ListEntry] {
        self.lists.get(container).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for MemorySurface {
    fn set_region_text(&mut self, region: &str, text: &str) {
        match self.regions.get_mut(region) {
            Some(state) => {
                state.text.clear();
                state.text.push_str(text);
            }
            None => log::debug!("Ignoring text for unknown region '{}'", region),
        }
    }

    fn set_region_visible(&mut self, region: &str, visible: bool) {
        match self.regions.get_mut(region) {
            Some(state) => state.visible = visible,
            None => log::debug!("Ignoring visibility for unknown region '{}'", region),
        }
    }

    fn clear_list(&mut self, container: &str) {
        if let Some(entries) = self.lists.get_mut(container) {
            entries.clear();
        }
    }

    fn append_list_item(&mut self, container: &str, entry: ListEntry) {
        match self.lists.get_mut(container) {
            Some(entries) => entries.push(entry),
            None => log::debug!("Ignoring entry for unknown list '{}'", container),
        }
    }

    fn ensure_region(&mut self, region: &str) -> bool {
        if self.regions.contains_key(region) {
            return false;
        }
        self.register(region, true);
        true
    }
}
