//! Controller-manager manifest set renderer.
//!
//! Renders the namespace/RBAC/Deployment/Service/cert-manager/Prometheus
//! YAML documents for one project [`Configuration`] as a single text blob,
//! later re-parsed into discrete documents by [`crate::pipeline`].
//!
//! Each optional block is an independent function returning whole documents;
//! [`render_manifests`] owns the composition and is the only place that
//! emits `---` separators. That keeps the invariants in one spot: no
//! separator before the first document, and an inactive block contributes
//! nothing — not even an empty document.

use tracing::instrument;

use crate::domain::Configuration;

/// Render the full manifest set for one configuration.
#[instrument(skip_all, fields(project = %config.name))]
pub fn render_manifests(config: &Configuration) -> String {
    let mut docs: Vec<String> = Vec::new();

    if !config.disable_create_rbac {
        docs.extend(leader_election_rbac(config));
        if !config.disable_auth_proxy {
            docs.extend(auth_proxy_rbac(config));
        }
    }
    if config.enable_prometheus {
        docs.push(prometheus_monitor(config));
    }
    if !config.disable_create_namespace {
        docs.push(namespace(config));
    }
    if config.enable_cert_manager {
        docs.extend(cert_manager(config));
    }
    docs.push(deployment(config));
    if config.enable_webhooks {
        docs.push(webhook_service(config));
    }
    if !config.disable_auth_proxy {
        docs.push(metrics_service(config));
    }

    docs.join("---\n")
}

/// Leader-election Role/RoleBinding, the metrics-reader ClusterRole, and
/// the manager ClusterRoleBinding.
fn leader_election_rbac(config: &Configuration) -> Vec<String> {
    let name = &config.name;
    let ns = config.system_namespace();
    vec![
        format!(
            "#
# RBAC: Leader election.
#
apiVersion: rbac.authorization.k8s.io/v1
kind: Role
metadata:
  name: {name}-leader-election-role
  namespace: {ns}
rules:
- apiGroups:
  - \"\"
  resources:
  - configmaps
  verbs:
  - get
  - list
  - watch
  - create
  - update
  - patch
  - delete
- apiGroups:
  - \"\"
  resources:
  - configmaps/status
  verbs:
  - get
  - update
  - patch
- apiGroups:
  - \"\"
  resources:
  - events
  verbs:
  - create
"
        ),
        format!(
            "apiVersion: rbac.authorization.k8s.io/v1beta1
kind: ClusterRole
metadata:
  name: {name}-metrics-reader
rules:
- nonResourceURLs: [\"/metrics\"]
  verbs: [\"get\"]
"
        ),
        format!(
            "apiVersion: rbac.authorization.k8s.io/v1
kind: RoleBinding
metadata:
  name: {name}-leader-election-rolebinding
roleRef:
  apiGroup: rbac.authorization.k8s.io
  kind: Role
  name: {name}-leader-election-role
subjects:
- kind: ServiceAccount
  name: default
  namespace: {ns}
"
        ),
        format!(
            "#
# RBAC: Manager permissions
#
apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRoleBinding
metadata:
  name: {name}-manager-rolebinding
roleRef:
  apiGroup: rbac.authorization.k8s.io
  kind: ClusterRole
  name: {name}-manager-role
subjects:
- kind: ServiceAccount
  name: default
  namespace: {ns}
"
        ),
    ]
}

/// ClusterRole/ClusterRoleBinding for the kube-rbac-proxy sidecar.
fn auth_proxy_rbac(config: &Configuration) -> Vec<String> {
    let name = &config.name;
    let ns = config.system_namespace();
    vec![
        format!(
            "#
# RBAC: Metrics auth proxy
#
apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRole
metadata:
  name: {name}-proxy-role
rules:
- apiGroups: [\"authentication.k8s.io\"]
  resources:
  - tokenreviews
  verbs: [\"create\"]
- apiGroups: [\"authorization.k8s.io\"]
  resources:
  - subjectaccessreviews
  verbs: [\"create\"]
"
        ),
        format!(
            "apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRoleBinding
metadata:
  name: {name}-proxy-rolebinding
roleRef:
  apiGroup: rbac.authorization.k8s.io
  kind: ClusterRole
  name: {name}-proxy-role
subjects:
- kind: ServiceAccount
  name: default
  namespace: {ns}
"
        ),
    ]
}

fn prometheus_monitor(config: &Configuration) -> String {
    let name = &config.name;
    let ns = config.system_namespace();
    format!(
        "#
# Prometheus Monitor Service (Metrics)
#
apiVersion: monitoring.coreos.com/v1
kind: ServiceMonitor
metadata:
  namespace: {ns}
  name: controller-manager-metrics-monitor
  labels:
    instance: {name}
    control-plane: controller-manager
spec:
  endpoints:
    - path: /metrics
      port: https
  selector:
    matchLabels:
      instance: {name}
      control-plane: controller-manager
"
    )
}

fn namespace(config: &Configuration) -> String {
    let name = &config.name;
    let ns = config.system_namespace();
    format!(
        "apiVersion: v1
kind: Namespace
metadata:
  name: {ns}
  labels:
    instance: {name}
    control-plane: controller-manager
"
    )
}

/// Self-signed Issuer plus the webhook serving Certificate.
fn cert_manager(config: &Configuration) -> Vec<String> {
    let name = &config.name;
    let ns = config.system_namespace();
    vec![
        format!(
            "# The following manifests contain a self-signed issuer CR and a certificate CR.
# More document can be found at https://docs.cert-manager.io
apiVersion: cert-manager.io/v1alpha2
kind: Issuer
metadata:
  name: {name}-selfsigned-issuer
  namespace: {ns}
spec:
  selfSigned: {{}}
"
        ),
        format!(
            "apiVersion: cert-manager.io/v1alpha2
kind: Certificate
metadata:
  name: {name}-serving-cert
  namespace: {ns}
spec:
  dnsNames:
  - {name}-webhook-service.{ns}.svc
  - {name}-webhook-service.{ns}.svc.cluster.local
  issuerRef:
    kind: Issuer
    name: selfsigned-issuer
  secretName: webhook-server-cert # this secret will not be prefixed, since it's not managed by kustomize
"
        ),
    ]
}

/// The controller-manager Deployment. Always emitted; the webhook port and
/// volume mount, the kube-rbac-proxy sidecar and the cert volume are
/// spliced in by the toggles.
fn deployment(config: &Configuration) -> String {
    let name = &config.name;
    let ns = config.system_namespace();
    let image = &config.image;

    let mut out = format!(
        "apiVersion: apps/v1
kind: Deployment
metadata:
  name: controller-manager
  namespace: {ns}
  labels:
    instance: {name}
    control-plane: controller-manager
spec:
  selector:
    matchLabels:
      instance: {name}
      control-plane: controller-manager
  replicas: 1
  template:
    metadata:
      labels:
        instance: {name}
        control-plane: controller-manager
    spec:
      terminationGracePeriodSeconds: 10
      containers:
      - name: manager
        image: {image}
        command: [ \"/manager\" ]
        args:
        - --enable-leader-election
"
    );
    if !config.disable_auth_proxy {
        out.push_str("        - --metrics-addr=127.0.0.1:8080\n");
    }
    out.push_str(
        "        resources:
          limits:
            cpu: 100m
            memory: 30Mi
          requests:
            cpu: 100m
            memory: 20Mi
",
    );
    if config.enable_webhooks {
        out.push_str(
            "        ports:
        - containerPort: 9443
          name: webhook-server
          protocol: TCP
        volumeMounts:
        - mountPath: /tmp/k8s-webhook-server/serving-certs
          name: cert
          readOnly: true
",
        );
    }
    if !config.disable_auth_proxy {
        out.push_str(
            "      - name: kube-rbac-proxy
        image: gcr.io/kubebuilder/kube-rbac-proxy:v0.5.0
        args:
        - \"--secure-listen-address=0.0.0.0:8443\"
        - \"--upstream=http://127.0.0.1:8080/\"
        - \"--logtostderr=true\"
        - \"--v=10\"
        ports:
        - containerPort: 8443
          name: https
",
        );
    }
    if config.enable_webhooks {
        out.push_str(
            "      volumes:
      - name: cert
        secret:
          defaultMode: 420
          secretName: webhook-server-cert
",
        );
    }
    out
}

fn webhook_service(config: &Configuration) -> String {
    let name = &config.name;
    let ns = config.system_namespace();
    format!(
        "apiVersion: v1
kind: Service
metadata:
  namespace: {ns}
  name: {name}-webhook-service
  labels:
    instance: {name}
    control-plane: webhook
spec:
  ports:
  - port: 443
    targetPort: webhook-server
  selector:
    instance: {name}
    control-plane: controller-manager
"
    )
}

fn metrics_service(config: &Configuration) -> String {
    let name = &config.name;
    let ns = config.system_namespace();
    format!(
        "apiVersion: v1
kind: Service
metadata:
  namespace: {ns}
  name: {name}-metrics-service
  labels:
    control-plane: controller-manager
    instance: {name}
spec:
  ports:
  - name: https
    port: 8443
    targetPort: https
  selector:
    control-plane: controller-manager
    instance: {name}
"
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{Document, read_documents};

    fn config() -> Configuration {
        Configuration::new("testproject", "example/image:v1")
    }

    fn parse(config: &Configuration) -> Vec<Document> {
        read_documents(&render_manifests(config), "manifests").unwrap()
    }

    #[test]
    fn default_configuration_emits_expected_documents() {
        // 4 leader-election RBAC + 2 proxy RBAC + namespace + deployment
        // + metrics service
        let docs = parse(&config());
        assert_eq!(docs.len(), 9);
    }

    #[test]
    fn everything_disabled_leaves_only_the_deployment() {
        let mut cfg = config();
        cfg.disable_create_rbac = true;
        cfg.disable_auth_proxy = true;
        cfg.disable_create_namespace = true;

        let docs = parse(&cfg);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["kind"], "Deployment");
    }

    #[test]
    fn webhook_toggle_adds_exactly_one_service_and_touches_nothing_else() {
        let base_cfg = config();
        let mut webhook_cfg = config();
        webhook_cfg.enable_webhooks = true;

        let base = parse(&base_cfg);
        let with = parse(&webhook_cfg);
        assert_eq!(with.len(), base.len() + 1);

        // The new document is the webhook Service.
        let added: Vec<_> = with
            .iter()
            .filter(|d| d["metadata"]["name"] == "testproject-webhook-service")
            .collect();
        assert_eq!(added.len(), 1);

        // The deployment gained exactly one webhook port and one mount.
        let text = render_manifests(&webhook_cfg);
        assert_eq!(text.matches("containerPort: 9443").count(), 1);
        assert_eq!(text.matches("name: webhook-server").count(), 1);
        assert_eq!(
            text.matches("mountPath: /tmp/k8s-webhook-server/serving-certs").count(),
            1
        );

        // Every other document is byte-identical.
        let strip = |docs: &[Document]| -> Vec<Document> {
            docs.iter()
                .filter(|d| {
                    d["kind"] != "Deployment"
                        && d["metadata"]["name"] != "testproject-webhook-service"
                })
                .cloned()
                .collect()
        };
        assert_eq!(strip(&base), strip(&with));
    }

    #[test]
    fn prometheus_toggle_adds_the_service_monitor() {
        let mut cfg = config();
        cfg.enable_prometheus = true;
        let docs = parse(&cfg);
        assert_eq!(docs.iter().filter(|d| d["kind"] == "ServiceMonitor").count(), 1);
    }

    #[test]
    fn cert_manager_toggle_adds_issuer_and_certificate() {
        let mut cfg = config();
        cfg.enable_cert_manager = true;
        let docs = parse(&cfg);
        assert_eq!(docs.iter().filter(|d| d["kind"] == "Issuer").count(), 1);
        assert_eq!(docs.iter().filter(|d| d["kind"] == "Certificate").count(), 1);
    }

    #[test]
    fn disabling_auth_proxy_drops_sidecar_and_metrics_service() {
        let mut cfg = config();
        cfg.disable_auth_proxy = true;
        let text = render_manifests(&cfg);
        assert!(!text.contains("kube-rbac-proxy"));
        assert!(!text.contains("metrics-addr"));
        assert!(!text.contains("testproject-metrics-service"));
        assert!(!text.contains("testproject-proxy-role"));
    }

    #[test]
    fn separators_never_produce_empty_documents() {
        // Exhaustive over the six toggles: the blob must parse cleanly with
        // no empty document for any combination.
        for bits in 0u8..64 {
            let mut cfg = config();
            cfg.disable_create_rbac = bits & 1 != 0;
            cfg.enable_webhooks = bits & 2 != 0;
            cfg.disable_auth_proxy = bits & 4 != 0;
            cfg.enable_prometheus = bits & 8 != 0;
            cfg.disable_create_namespace = bits & 16 != 0;
            cfg.enable_cert_manager = bits & 32 != 0;

            let text = render_manifests(&cfg);
            assert!(!text.starts_with("---"), "leading separator for {bits:#08b}");
            assert!(!text.contains("---\n---"), "empty document for {bits:#08b}");
            let docs = read_documents(&text, "manifests").unwrap();
            assert!(docs.iter().all(|d| !d.is_null()), "null document for {bits:#08b}");
        }
    }
}
