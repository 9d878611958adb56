// src/services/access_policy.rs

// Fonte única de verdade para "o papel R pode usar o recurso P?".
// Todos os guardiões (rotas, navegação, docs) consultam ESTA tabela;
// nenhum handler re-implementa lista de papéis por conta própria.
//
// A política é pura: nada de I/O, nada de estado global. O principal
// autenticado chega sempre por parâmetro, nunca por storage ambiente.

use serde::{Deserialize, Serialize};

// Papéis conhecidos do sistema. Qualquer string fora daqui é negada
// por padrão (fail closed), sem erro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Manager,
    BranchManager,
    Cashier,
    Technician,
    Accountant,
    Receptionist,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "super_admin" => Some(Role::SuperAdmin),
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "branch_manager" => Some(Role::BranchManager),
            "cashier" => Some(Role::Cashier),
            "technician" => Some(Role::Technician),
            "accountant" => Some(Role::Accountant),
            "receptionist" => Some(Role::Receptionist),
            _ => None,
        }
    }

    // Camada de acesso total: enxerga qualquer recurso.
    pub fn has_full_access(self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin | Role::Manager)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::BranchManager => "branch_manager",
            Role::Cashier => "cashier",
            Role::Technician => "technician",
            Role::Accountant => "accountant",
            Role::Receptionist => "receptionist",
        }
    }
}

// O ator autenticado em nome de quem a operação é avaliada.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: i32,
    pub role: String,
}

// true sse existe um principal com papel não-vazio.
pub fn is_authenticated(principal: Option<&Principal>) -> bool {
    principal.is_some_and(|p| !p.role.trim().is_empty())
}

// Decide se `role` pode usar `resource_key` (ex.: "inventory.manage").
// O módulo do recurso é o trecho antes do primeiro ponto; "dashboard" e
// "logout" valem para qualquer papel autenticado conhecido.
pub fn is_allowed(role: &str, resource_key: &str) -> bool {
    let Some(role) = Role::parse(role) else {
        return false;
    };
    if role.has_full_access() {
        return true;
    }

    let module = resource_key.split('.').next().unwrap_or(resource_key);
    match module {
        "dashboard" | "logout" => true,
        "accounts" => role == Role::Accountant,
        "vehicle_customer" => matches!(role, Role::Technician | Role::Receptionist),
        // inventory, users, branches e tudo o mais: só a camada de
        // acesso total, já tratada acima.
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_RESOURCE_KEYS: &[&str] = &[
        "dashboard",
        "logout",
        "inventory.manage",
        "inventory.job_orders",
        "vehicle_customer.manage",
        "accounts.manage",
        "accounts.trial_balance",
        "users.manage",
        "branches.manage",
    ];

    const RESTRICTED_ROLES: &[&str] = &[
        "branch_manager",
        "cashier",
        "technician",
        "accountant",
        "receptionist",
    ];

    #[test]
    fn camada_de_acesso_total_enxerga_tudo() {
        for role in ["super_admin", "admin", "manager"] {
            for key in ALL_RESOURCE_KEYS {
                assert!(is_allowed(role, key), "{} deveria acessar {}", role, key);
            }
        }
    }

    #[test]
    fn papel_desconhecido_e_sempre_negado() {
        for key in ALL_RESOURCE_KEYS {
            assert!(!is_allowed("hacker", key));
            assert!(!is_allowed("", key));
            assert!(!is_allowed("ADMIN", key)); // case-sensitive de propósito
        }
    }

    #[test]
    fn dashboard_e_logout_valem_para_todo_papel_conhecido() {
        for role in RESTRICTED_ROLES {
            assert!(is_allowed(role, "dashboard"));
            assert!(is_allowed(role, "logout"));
        }
    }

    #[test]
    fn contador_acessa_apenas_contabilidade() {
        assert!(is_allowed("accountant", "accounts.manage"));
        assert!(is_allowed("accountant", "accounts.trial_balance"));
        assert!(!is_allowed("accountant", "inventory.manage"));
        assert!(!is_allowed("accountant", "vehicle_customer.manage"));
        assert!(!is_allowed("accountant", "users.manage"));
    }

    #[test]
    fn tecnico_e_recepcao_acessam_veiculos_e_clientes() {
        for role in ["technician", "receptionist"] {
            assert!(is_allowed(role, "vehicle_customer.manage"));
            assert!(!is_allowed(role, "inventory.manage"), "{} não vê estoque", role);
            assert!(!is_allowed(role, "accounts.manage"));
        }
    }

    #[test]
    fn inventario_e_exclusivo_da_camada_total() {
        for role in RESTRICTED_ROLES {
            assert!(!is_allowed(role, "inventory.manage"));
            assert!(!is_allowed(role, "inventory.job_orders"));
        }
    }

    #[test]
    fn papeis_restritos_negados_fora_da_sua_lista() {
        for role in ["branch_manager", "cashier"] {
            for key in ALL_RESOURCE_KEYS {
                let expected = matches!(*key, "dashboard" | "logout");
                assert_eq!(is_allowed(role, key), expected, "{} x {}", role, key);
            }
        }
    }

    #[test]
    fn autenticacao_exige_principal_com_papel() {
        assert!(!is_authenticated(None));

        let sem_papel = Principal { user_id: 1, role: "  ".into() };
        assert!(!is_authenticated(Some(&sem_papel)));

        let tecnico = Principal { user_id: 2, role: "technician".into() };
        assert!(is_authenticated(Some(&tecnico)));
    }

    #[test]
    fn parse_e_as_str_sao_simetricos() {
        for raw in [
            "super_admin",
            "admin",
            "manager",
            "branch_manager",
            "cashier",
            "technician",
            "accountant",
            "receptionist",
        ] {
            let role = Role::parse(raw).expect("papel conhecido");
            assert_eq!(role.as_str(), raw);
        }
    }
}
