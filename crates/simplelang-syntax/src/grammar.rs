//! The accepted grammar, as printed by `simplelang grammar`.

/// EBNF of the language accepted by the parser.
pub const GRAMMAR: &str = r#"program        = { statement } EOF ;

statement      = declaration
               | assignment
               | if_statement
               | while_statement
               | for_statement
               | block
               | print_statement
               | input_statement ;

declaration    = type IDENTIFIER [ "=" expression ] ";" ;
assignment     = IDENTIFIER "=" expression ";" ;

if_statement   = "if" "(" expression ")" block
                 [ "else" ( if_statement | block ) ] ;
while_statement = "while" "(" expression ")" block ;
for_statement  = "for" "(" [ for_init ] ";" expression ";" [ for_update ] ")" block ;
for_init       = type IDENTIFIER "=" expression
               | IDENTIFIER "=" expression ;
for_update     = IDENTIFIER "=" expression ;

block          = "{" { statement } "}" ;
print_statement = "dikhao" "(" expression { "," expression } ")" ";" ;
input_statement = "likho" "(" IDENTIFIER ")" ";" ;

expression     = logical_or ;
logical_or     = logical_and { "||" logical_and } ;
logical_and    = equality { "&&" equality } ;
equality       = relational { ( "==" | "!=" ) relational } ;
relational     = additive { ( "<" | ">" | "<=" | ">=" ) additive } ;
additive       = multiplicative { ( "+" | "-" ) multiplicative } ;
multiplicative = unary { ( "*" | "/" | "%" ) unary } ;
unary          = ( "!" | "-" ) unary | primary ;
primary        = IDENTIFIER | INTEGER | "true" | "false" | STRING_LITERAL
               | "(" expression ")" ;

type           = "int" | "bool" | "string" ;
IDENTIFIER     = letter { letter | digit | "_" } ;
INTEGER        = digit { digit } ;
STRING_LITERAL = '"' { char | escape } '"' ;
escape         = "\" any ;  (* \n \t \r \\ \" decode; others stand for themselves *)
"#;
