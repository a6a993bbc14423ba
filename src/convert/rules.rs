// src/convert/rules.rs

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// How a fixed remap is reported once it fires.
///
/// `Changed` is a routine remap. `Recommended` marks columns the warehouse
/// team asks downstream owners to migrate. `Prohibited` marks columns that
/// must not reach Redshift unmodified and get flagged loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advice {
    Changed,
    Recommended,
    Prohibited,
}

/// Replacement name and type for one well-known warehouse column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnRule {
    pub name: &'static str,
    pub ty: &'static str,
    pub advice: Advice,
}

use Advice::{Changed, Prohibited, Recommended};

/// Fixed remaps keyed by uppercased source column name. These take
/// precedence over every general mapping rule, and character set
/// annotations never apply to them.
static RULES: &[(&str, &str, &str, Advice)] = &[
    ("LOG_DATE", "log_date", "DATE", Changed),
    ("SUMMARY_DATE", "summary_date", "DATE", Recommended),
    ("GUID", "guid", "CHAR(26)", Changed),
    ("STORE_ID", "seller_id", "VARCHAR(30)", Changed),
    ("SELLER_ID", "seller_id", "VARCHAR(30)", Changed),
    ("Y_ID_HEX", "y_id_hex", "VARCHAR(18)", Changed),
    ("ORDER_ID", "order_id", "VARCHAR(50)", Changed),
    ("ORDER_DATE", "order_date", "DATE", Changed),
    ("ITEM_CODE", "srid", "VARCHAR(99)", Changed),
    ("LOG_MONTH", "log_month", "INTEGER", Changed),
    ("HASH_ID_HEX", "hash_id_hex", "VARCHAR(18)", Changed),
    ("REPORT_DATE", "report_date", "DATE", Recommended),
    ("CAMPAIGN_ID", "campaign_id", "INTEGER", Changed),
    ("PRODUCT_CATEGORY_ID", "product_category_id", "INTEGER", Changed),
    ("SUMMARY_MONTH", "summary_month", "INTEGER", Recommended),
    ("COUPON_ID", "coupon_id", "VARCHAR(64)", Changed),
    ("VIEW_ID", "view_id", "BIGINT", Changed),
    ("MK_CAMPAIGN_ID", "mk_campaign_id", "VARCHAR(16)", Changed),
    ("MONTH_ID", "month_id", "INTEGER", Recommended),
    ("LIST_ID", "list_id", "INTEGER", Prohibited),
    ("EVENT_ID", "event_id", "INTEGER", Recommended),
    ("STORE_ACCOUNT", "seller_id", "VARCHAR(30)", Changed),
    ("CREATE_DATE", "create_date", "DATE", Changed),
    ("CATALOG_ID", "catalog_id", "VARCHAR(10)", Changed),
    ("SERV_DATE", "serv_date", "DATE", Recommended),
    ("GENRE_CATEGORY_ID", "genre_category_id", "INTEGER", Changed),
    ("JAN_CODE", "jan_code", "VARCHAR(13)", Changed),
    ("GIFT_CARD_ID", "gift_card_id", "VARCHAR(20)", Changed),
    ("SAPP_ID", "sapp_id", "VARCHAR(20)", Changed),
    ("SELL_ID", "sell_id", "VARCHAR(8)", Changed),
    ("SETTLE_ID", "settle_id", "VARCHAR(7)", Changed),
    ("SELLER_EVENT_ID", "seller_event_id", "INTEGER", Changed),
    ("ARTICLE_ID", "article_id", "DECIMAL(20, 0)", Changed),
    ("HASH_ID", "hash_id", "VARCHAR(104)", Prohibited),
    ("PROMOTION_ID", "promotion_id", "VARCHAR(10)", Changed),
    ("TIME_SALE_COUPON_CAMPAIGN_ID", "time_sale_coupon_campaign_id", "VARCHAR(10)", Changed),
    ("BASKET_ID", "basket_id", "VARCHAR(36)", Changed),
    ("SRID", "srid", "VARCHAR(99)", Changed),
    ("SELLER_MANAGED_ITEM_ID", "seller_managed_item_id", "VARCHAR(99)", Changed),
    ("YSRID", "ysrid", "VARCHAR(130)", Changed),
    ("YSRID_LIST", "ysrid_list", "VARCHAR(130)", Prohibited),
    ("SKUID", "skuid", "VARCHAR(99)", Changed),
    ("SKU_EDIT_ID", "sku_edit_id", "VARCHAR(99)", Prohibited),
    ("BRAND_ID", "brand_id", "INTEGER", Changed),
    ("SPEC_ID", "spec_id", "INTEGER", Changed),
    ("SPEC_VALUE_ID", "spec_value_id", "INTEGER", Changed),
    ("SET_ID", "set_id", "INTEGER", Changed),
    ("SP_CODE", "sp_code", "VARCHAR(54)", Changed),
    ("POINT_CODE", "point_code", "VARCHAR(10)", Changed),
    ("OPTION_ID", "option_id", "VARCHAR(16)", Changed),
    ("OPTION_CHOICE_ID", "option_choice_id", "VARCHAR(16)", Changed),
    ("ACCESS_SECONDS", "access_seconds", "BIGINT", Changed),
    ("MAIL_HEX", "mail_hex", "VARCHAR(20)", Changed),
];

pub static COLUMN_RULES: Lazy<HashMap<&'static str, ColumnRule>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|&(key, name, ty, advice)| (key, ColumnRule { name, ty, advice }))
        .collect()
});
