/*!
# Statements
*/

#[path = "statements/assign.rs"]
#[allow(non_snake_case)]
pub mod ASSIGN;

#[path = "statements/do.rs"]
#[allow(non_snake_case)]
pub mod DO;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/seed.rs"]
#[allow(non_snake_case)]
pub mod SEED;
