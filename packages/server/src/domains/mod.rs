// Domain modules
//
// Each domain owns its models, actions and request/response data.

pub mod recommendations;
