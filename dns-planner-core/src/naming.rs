//! Service hosted-zone naming.

/// How a service's hosted-zone name is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoneSuffix {
    /// `"{service}.{region}.{suffix}"`
    Regional(&'static str),
    /// `"{service}.{suffix}"` -- the region does not participate
    Global(&'static str),
}

/// Suffix used when a service has no override entry.
const DEFAULT_SUFFIX: ZoneSuffix = ZoneSuffix::Regional("amazonaws.com");

/// Services whose hosted zones do not live under the default suffix.
const SERVICE_SUFFIXES: &[(&str, ZoneSuffix)] = &[
    ("notebook", ZoneSuffix::Regional("sagemaker.aws")),
    ("studio", ZoneSuffix::Regional("sagemaker.aws")),
    ("s3-global.accesspoint", ZoneSuffix::Global("aws.com")),
];

/// Hosted-zone name for an interface endpoint of `service` in `region`.
///
/// Services compose as `"{service}.{region}.amazonaws.com"` unless
/// [`SERVICE_SUFFIXES`] carries an override for them. Inputs are not
/// validated; this always returns a string.
#[must_use]
pub fn service_zone_name(service: &str, region: &str) -> String {
    let suffix = SERVICE_SUFFIXES
        .iter()
        .find(|(s, _)| *s == service)
        .map_or(DEFAULT_SUFFIX, |(_, suffix)| *suffix);

    match suffix {
        ZoneSuffix::Regional(domain) => format!("{service}.{region}.{domain}"),
        ZoneSuffix::Global(domain) => format!("{service}.{domain}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_services_use_amazonaws_suffix() {
        assert_eq!(
            service_zone_name("ec2", "us-east-1"),
            "ec2.us-east-1.amazonaws.com"
        );
        assert_eq!(
            service_zone_name("kms", "ap-southeast-2"),
            "kms.ap-southeast-2.amazonaws.com"
        );
    }

    #[test]
    fn notebook_uses_sagemaker_suffix() {
        assert_eq!(
            service_zone_name("notebook", "us-east-1"),
            "notebook.us-east-1.sagemaker.aws"
        );
    }

    #[test]
    fn studio_uses_sagemaker_suffix() {
        assert_eq!(
            service_zone_name("studio", "eu-west-1"),
            "studio.eu-west-1.sagemaker.aws"
        );
    }

    #[test]
    fn s3_global_accesspoint_ignores_region() {
        assert_eq!(
            service_zone_name("s3-global.accesspoint", "us-west-2"),
            "s3-global.accesspoint.aws.com"
        );
        assert_eq!(
            service_zone_name("s3-global.accesspoint", "eu-central-1"),
            "s3-global.accesspoint.aws.com"
        );
    }
}
