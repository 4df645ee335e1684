//! Server directory - lookup over the catalog's server list.

use super::catalog::ServerDescriptor;

/// Read-only directory of the known mock servers.
///
/// Construction order is preserved; `servers()` returns the set exactly as
/// seeded, with no filtering.
#[derive(Debug, Clone)]
pub struct ServerDirectory {
    servers: Vec<ServerDescriptor>,
}

impl ServerDirectory {
    /// Create a directory over the given descriptors.
    pub fn new(servers: Vec<ServerDescriptor>) -> Self {
        Self { servers }
    }

    /// All known servers, in insertion order.
    pub fn servers(&self) -> &[ServerDescriptor] {
        &self.servers
    }

    /// Find a server by exact id match.
    pub fn find(&self, id: &str) -> Option<&ServerDescriptor> {
        self.servers.iter().find(|s| s.id == id)
    }

    /// Find a server by exact url match.
    pub fn find_by_url(&self, url: &str) -> Option<&ServerDescriptor> {
        self.servers.iter().find(|s| s.url == url)
    }

    /// Comma-separated list of known ids, used in error messages.
    pub fn known_ids(&self) -> String {
        self.servers
            .iter()
            .map(|s| s.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::servers::catalog::Catalog;

    fn directory() -> ServerDirectory {
        ServerDirectory::new(Catalog::default().servers)
    }

    #[test]
    fn test_servers_preserve_insertion_order() {
        let dir = directory();
        let ids: Vec<_> = dir.servers().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["mock-server-1", "mock-server-2"]);
    }

    #[test]
    fn test_find_by_id() {
        let dir = directory();
        assert_eq!(dir.find("mock-server-2").unwrap().name, "Calculator MCP Server");
        assert!(dir.find("mock-server-3").is_none());
    }

    #[test]
    fn test_find_by_url() {
        let dir = directory();
        let server = dir.find_by_url("http://localhost:3003/mcp").unwrap();
        assert_eq!(server.id, "mock-server-1");
        assert!(dir.find_by_url("http://localhost:9999/mcp").is_none());
    }

    #[test]
    fn test_known_ids() {
        assert_eq!(directory().known_ids(), "mock-server-1, mock-server-2");
    }
}
