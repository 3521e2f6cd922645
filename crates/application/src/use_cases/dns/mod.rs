mod resolve_address;
mod resolve_cname_chain;

pub use resolve_address::ResolveAddressUseCase;
pub use resolve_cname_chain::ResolveCnameChainUseCase;
