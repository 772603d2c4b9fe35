/// Maximum site count accepted by subset enumeration.
///
/// The search space is 2^n - 1 subsets; past roughly two dozen sites the
/// enumeration stops being tractable, so anything above this limit is
/// rejected up front. 2^20 stays around a million subsets.
pub const MAX_ENUMERATION_SITES: usize = 20;

/// Name of the synthetic customer that absorbs surplus capacity.
pub const DUMMY_CUSTOMER_NAME: &str = "Dummy";

/// Description used when a combination covers the full site list.
pub const ALL_SITES_DESCRIPTION: &str = "all sites";
