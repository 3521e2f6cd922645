pub mod prober;

pub use prober::ReqwestHttpProber;
