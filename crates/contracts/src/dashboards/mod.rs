pub mod d400_campaign_snapshot;
pub mod d401_pricing_adjustments;
pub mod d402_customer_segments;
