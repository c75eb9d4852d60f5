pub mod cliente;
pub mod estacionamento;

pub use cliente::{Cliente, ClienteForm};
pub use estacionamento::{Estacionamento, EstacionamentoForm};
