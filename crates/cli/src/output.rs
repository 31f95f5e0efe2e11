use colored::{Color, Colorize};
use ec2scope_core::cloud_provider::InstanceDetails;

const SEPARATOR_WIDTH: usize = 50;

/// Shown in the text renderer for IPs the instance does not have. Other
/// empty fields print as-is (or are skipped, in the case of the name).
const MISSING_IP: &str = "\u{2014}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

pub fn render_json(instances: &[InstanceDetails]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(instances)
}

pub fn render_text(instances: &[InstanceDetails]) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();

    for instance in instances {
        out.push_str(&separator);
        out.push('\n');
        out.push_str(&format!("Instance: {}\n", instance.id));
        if !instance.name.is_empty() {
            out.push_str(&format!("Name: {}\n", instance.name));
        }
        out.push_str(&format!("Type: {}\n", instance.instance_type));

        let state_line = format!("State: {}", instance.state.to_uppercase());
        out.push_str(&format!(
            "{}\n",
            state_line.color(state_color(&instance.state))
        ));

        out.push_str(&format!("Public IP: {}\n", display_ip(&instance.public_ip)));
        out.push_str(&format!(
            "Private IP: {}\n",
            display_ip(&instance.private_ip)
        ));
        out.push_str(&format!("AZ: {}\n", instance.availability_zone));
        out.push_str(&format!("AMI: {}\n", instance.ami_id));
        out.push_str(&format!("Architecture: {}\n", instance.architecture));
        out.push_str(&format!("Launched: {}\n", instance.launch_time));
        out.push_str(&separator);
        out.push_str("\n\n");
    }

    out
}

fn display_ip(ip: &str) -> &str {
    if ip.is_empty() { MISSING_IP } else { ip }
}

fn state_color(state: &str) -> Color {
    if state == "running" {
        Color::Green
    } else {
        Color::Yellow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_instance() -> InstanceDetails {
        InstanceDetails {
            id: "i-02ab34cd56".to_string(),
            name: "opsa-server".to_string(),
            instance_type: "t3.micro".to_string(),
            state: "running".to_string(),
            public_ip: "16.171.1.1".to_string(),
            private_ip: "172.31.1.1".to_string(),
            availability_zone: "eu-north-1b".to_string(),
            ami_id: "ami-0abcd1234".to_string(),
            architecture: "x86_64".to_string(),
            launch_time: "2025-11-22 15:35:06 UTC".to_string(),
        }
    }

    #[test]
    fn json_render_round_trips() {
        let instances = vec![running_instance()];

        let json = render_json(&instances).unwrap();
        let decoded: Vec<InstanceDetails> = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, instances);
    }

    #[test]
    fn json_render_uses_flat_snake_case_keys() {
        let json = render_json(&[running_instance()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["id"], "i-02ab34cd56");
        assert_eq!(value[0]["type"], "t3.micro");
        assert_eq!(value[0]["public_ip"], "16.171.1.1");
        assert_eq!(value[0]["availability_zone"], "eu-north-1b");
        assert_eq!(value[0]["ami_id"], "ami-0abcd1234");
        assert_eq!(value[0]["launch_time"], "2025-11-22 15:35:06 UTC");
    }

    #[test]
    fn text_render_lays_out_the_full_block() {
        colored::control::set_override(false);

        let text = render_text(&[running_instance()]);

        let separator = "-".repeat(50);
        let expected = format!(
            "{separator}\n\
             Instance: i-02ab34cd56\n\
             Name: opsa-server\n\
             Type: t3.micro\n\
             State: RUNNING\n\
             Public IP: 16.171.1.1\n\
             Private IP: 172.31.1.1\n\
             AZ: eu-north-1b\n\
             AMI: ami-0abcd1234\n\
             Architecture: x86_64\n\
             Launched: 2025-11-22 15:35:06 UTC\n\
             {separator}\n\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn text_render_skips_name_but_dashes_ips() {
        colored::control::set_override(false);

        let instance = InstanceDetails {
            id: "i-0de11aa22".to_string(),
            state: "stopped".to_string(),
            ..Default::default()
        };

        let text = render_text(&[instance]);

        assert!(!text.contains("Name:"));
        assert!(text.contains("Public IP: \u{2014}\n"));
        assert!(text.contains("Private IP: \u{2014}\n"));
        assert!(text.contains("AZ: \n"));
        assert!(text.contains("Launched: \n"));
    }

    #[test]
    fn text_render_uppercases_the_state() {
        colored::control::set_override(false);

        let stopped = InstanceDetails {
            id: "i-0de11aa22".to_string(),
            state: "stopped".to_string(),
            ..Default::default()
        };

        let text = render_text(&[stopped]);

        assert!(text.contains("State: STOPPED"));
    }

    #[test]
    fn running_state_is_colored_apart_from_the_rest() {
        assert_eq!(state_color("running"), Color::Green);
        assert_eq!(state_color("stopped"), Color::Yellow);
        assert_eq!(state_color("pending"), Color::Yellow);
        assert_ne!(state_color("running"), state_color("stopped"));
    }

    #[test]
    fn renders_one_block_per_instance() {
        colored::control::set_override(false);

        let first = running_instance();
        let second = InstanceDetails {
            id: "i-0de11aa22".to_string(),
            state: "stopped".to_string(),
            ..Default::default()
        };

        let text = render_text(&[first, second]);

        assert!(text.contains("Instance: i-02ab34cd56"));
        assert!(text.contains("Instance: i-0de11aa22"));
        assert_eq!(text.matches(&"-".repeat(50)).count(), 4);
    }
}
