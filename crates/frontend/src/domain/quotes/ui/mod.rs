pub mod admin_bids;
pub mod bid_item;
pub mod bid_list;
