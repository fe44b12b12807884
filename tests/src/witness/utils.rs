use zklogin_common::{
    backends::{ProverError, ProvingBackend},
    types::{ProofData, ZkProof},
};
use zklogin_core::witness::WitnessInput;

/// A proving backend that checks it was handed a well-formed witness
/// document and returns a fixed proof
pub struct MockProver;

impl ProvingBackend for MockProver {
    fn prove(&self, input_json: &[u8]) -> Result<ZkProof, ProverError> {
        let input = std::str::from_utf8(input_json).map_err(|e| ProverError(e.to_string()))?;
        let witness = WitnessInput::from_json(input).map_err(|e| ProverError(e.to_string()))?;

        Ok(ZkProof {
            proof: mock_proof_data(),
            pub_signals: vec![witness.private_key().limbs()[0].to_string(), "1".to_string()],
        })
    }
}

pub fn mock_proof_data() -> ProofData {
    let strings = |values: &[&str]| values.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    ProofData {
        a: strings(&["1", "2", "1"]),
        b: vec![strings(&["3", "4"]), strings(&["5", "6"]), strings(&["1", "0"])],
        c: strings(&["7", "8", "1"]),
        protocol: "groth16".to_string(),
        curve: "bn128".to_string(),
    }
}
