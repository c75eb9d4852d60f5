pub mod cliente;
pub mod estacionamento;
