use crate::commands::{CmdMessage, CmdResult};
use crate::dos::Dos;
use crate::endpoint::EndpointRegistration;
use crate::symbol::Vocabulary;

pub fn run(hostname: &str, dos: &str, edr_id: Option<&str>) -> CmdResult {
    let registration = EndpointRegistration::new(hostname, dos, edr_id);
    let mut result = CmdResult::default();
    if registration.dos == Dos::FALLBACK.name() {
        result.add_message(CmdMessage::warning(format!(
            "Platform '{}' not recognized, endpoint will register as none",
            dos
        )));
    }
    result.with_endpoint(registration)
}
