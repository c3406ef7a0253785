mod catalogue;
mod credential_flow;
mod envelopes;
mod tenant_scope;
