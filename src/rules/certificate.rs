//! Viewer certificate rules

use crate::rules::{Rule, RuleContext};
use crate::template::{DistributionConfig, ViewerCertificate};

/// Certificate rule - an ACM ARN keeps the viewer certificate block, none drops it
pub struct CertificateRule;

impl Rule for CertificateRule {
    fn name(&self) -> &'static str {
        "certificate"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        match &context.config.certificate {
            Some(settings) => {
                let certificate = distribution
                    .viewer_certificate
                    .get_or_insert_with(|| ViewerCertificate::sni(settings.arn.clone()));
                certificate.acm_certificate_arn = settings.arn.clone();
            }
            None => distribution.viewer_certificate = None,
        }
    }
}

/// MinimumProtocolVersion rule - only ever writes into an existing certificate block
pub struct MinimumProtocolVersionRule;

impl Rule for MinimumProtocolVersionRule {
    fn name(&self) -> &'static str {
        "minimum-protocol-version"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        let Some(version) = context
            .config
            .certificate
            .as_ref()
            .and_then(|c| c.minimum_protocol_version.as_ref())
        else {
            return;
        };
        if let Some(certificate) = distribution.viewer_certificate.as_mut() {
            certificate.minimum_protocol_version = Some(version.clone());
        }
    }
}
