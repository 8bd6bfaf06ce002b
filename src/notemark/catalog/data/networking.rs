use crate::model::Topic;

pub(super) fn topics() -> Vec<Topic> {
    vec![
        Topic::new("ping", "Diagnostics", "probe a host with ICMP echo requests")
            .steps([
                "Sends an ICMP echo request once per second",
                "The target answers with an echo reply",
                "Round-trip time and loss percentage summarize link health",
            ])
            .example("ping -c 4 example.com", "four probes, then a summary")
            .real_world("Still the first question asked of any unreachable service: does it ping?"),
        Topic::new("traceroute", "Diagnostics", "list every router hop between you and a host")
            .example("traceroute example.com", "see where latency enters the path"),
        Topic::new("dig", "Diagnostics", "query DNS records directly")
            .example("dig +short example.com", "just the A records")
            .example("dig MX example.com", "mail exchangers for a domain"),
        Topic::new("curl", "Transfer", "transfer data to or from a URL, one request at a time")
            .steps([
                "Resolves the host and opens a TCP (and usually TLS) connection",
                "Writes an HTTP request with any headers and body you specify",
                "Streams the response to stdout; -i includes the status line and headers",
            ])
            .example("curl -i https://api.example.com/health", "response with headers")
            .example("curl -X POST -H 'Content-Type: application/json' -d '{\"q\":\"grep\"}' https://api.example.com/search", "JSON POST")
            .real_world("The universal API debugging tool; most bug reports against an HTTP service start with a curl transcript."),
        Topic::new("wget", "Transfer", "non-interactive downloader with retry and mirroring")
            .example("wget -c https://cdn.example.com/big.iso", "resume a partial download"),
        Topic::new("scp", "Transfer", "copy files between hosts over SSH")
            .example("scp release.tar.gz deploy@web1:/srv/releases/", "push an artifact to a server"),
        Topic::new("ssh", "Remote Access", "open an encrypted shell on a remote machine")
            .steps([
                "Negotiates ciphers and verifies the server's host key",
                "Authenticates with your key pair (or password)",
                "Binds your terminal to a shell on the remote host",
            ])
            .example("ssh deploy@web1.example.com", "interactive login")
            .example("ssh web1 'journalctl -u nginx --since -1h'", "run one remote command and exit")
            .real_world("Every remote deployment, debugging session, and scp/rsync transfer rides on ssh."),
        Topic::new("netstat", "Inspection", "show sockets, listening ports, and routing tables")
            .example("netstat -tlnp", "which process listens on which TCP port"),
        Topic::new("ip", "Inspection", "show and configure interfaces, addresses, and routes")
            .example("ip addr", "addresses per interface")
            .example("ip route", "the kernel routing table"),
        Topic::new("tcpdump", "Inspection", "capture and decode packets on an interface")
            .example("tcpdump -i eth0 port 443", "watch TLS traffic on one port")
            .real_world("When logs disagree with reality, the packet capture is the arbiter."),
    ]
}
