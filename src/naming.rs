//! @acp:module "API Naming"
//! @acp:summary "Resolves the API Gateway name used in the distribution comment"
//! @acp:domain cdn
//! @acp:layer service

use crate::config::{DeploymentConfig, InvocationContext};

/// Naming collaborator supplied by the host
pub trait ApiNaming {
    /// Name the host gives the API Gateway of this service
    fn api_gateway_name(&self) -> String;
}

/// Serverless naming: `provider.apiName` when set, else `<stage>-<service>`
#[derive(Debug, Clone)]
pub struct ServerlessNaming {
    service: String,
    stage: String,
    api_name: Option<String>,
}

impl ServerlessNaming {
    pub fn new(deployment: &DeploymentConfig, invocation: &InvocationContext) -> Self {
        Self {
            service: deployment.service_name().to_string(),
            stage: invocation.stage.clone(),
            api_name: deployment.provider.api_name.clone(),
        }
    }
}

impl ApiNaming for ServerlessNaming {
    fn api_gateway_name(&self) -> String {
        match &self.api_name {
            Some(name) => name.clone(),
            None => format!("{}-{}", self.stage, self.service),
        }
    }
}
