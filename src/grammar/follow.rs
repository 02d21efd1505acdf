use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// FOLLOW set per nonterminal. A symbol is a nonterminal exactly when
    /// it has an entry here; every nonterminal reachable during parsing
    /// has one.
    pub static ref FOLLOW_SETS: HashMap<&'static str, &'static [&'static str]> = {
        let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        map.insert("Program", &["$"][..]);
        map.insert("DeclarationList", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "if", "while", "return", "$"][..]);
        map.insert("Declaration", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "if", "int", "while", "return", "void", "$"][..]);
        map.insert("DeclarationInitial", &[";", "[", "(", ")", ","][..]);
        map.insert("DeclarationPrime", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "if", "int", "while", "return", "void", "$"][..]);
        map.insert("VarDeclarationPrime", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "if", "int", "while", "return", "void", "$"][..]);
        map.insert("FunDeclarationPrime", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "if", "int", "while", "return", "void", "$"][..]);
        map.insert("TypeSpecifier", &["ID"][..]);
        map.insert("Params", &[")"][..]);
        map.insert("ParamList", &[")"][..]);
        map.insert("Param", &[")", ","][..]);
        map.insert("ParamPrime", &[")", ","][..]);
        map.insert("CompoundStmt", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "else", "if", "endif", "int", "while", "return", "void", "$"][..]);
        map.insert("StatementList", &["}"][..]);
        map.insert("Statement", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "else", "if", "endif", "while", "return"][..]);
        map.insert("ExpressionStmt", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "else", "if", "endif", "while", "return"][..]);
        map.insert("SelectionStmt", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "else", "if", "endif", "while", "return"][..]);
        map.insert("ElseStmt", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "else", "if", "endif", "while", "return"][..]);
        map.insert("IterationStmt", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "else", "if", "endif", "while", "return"][..]);
        map.insert("ReturnStmt", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "else", "if", "endif", "while", "return"][..]);
        map.insert("ReturnStmtPrime", &["ID", ";", "NUM", "(", "{", "}", "+", "-", "break", "else", "if", "endif", "while", "return"][..]);
        map.insert("Expression", &[";", "]", ")", ","][..]);
        map.insert("B", &[";", "]", ")", ","][..]);
        map.insert("H", &[";", "]", ")", ","][..]);
        map.insert("SimpleExpressionZegond", &[";", "]", ")", ","][..]);
        map.insert("SimpleExpressionPrime", &[";", "]", ")", ","][..]);
        map.insert("C", &[";", "]", ")", ","][..]);
        map.insert("Relop", &["ID", "NUM", "(", "+", "-"][..]);
        map.insert("AdditiveExpression", &[";", "]", ")", ","][..]);
        map.insert("AdditiveExpressionPrime", &[";", "]", ")", ",", "<", "=="][..]);
        map.insert("AdditiveExpressionZegond", &[";", "]", ")", ",", "<", "=="][..]);
        map.insert("D", &[";", "]", ")", ",", "<", "=="][..]);
        map.insert("Addop", &["ID", "NUM", "(", "+", "-"][..]);
        map.insert("Term", &[";", "]", ")", ",", "+", "-", "<", "=="][..]);
        map.insert("TermPrime", &[";", "]", ")", ",", "+", "-", "<", "=="][..]);
        map.insert("TermZegond", &[";", "]", ")", ",", "+", "-", "<", "=="][..]);
        map.insert("G", &[";", "]", ")", ",", "+", "-", "<", "=="][..]);
        map.insert("Mulop", &["ID", "NUM", "(", "+", "-"][..]);
        map.insert("SignedFactor", &[";", "]", ")", ",", "+", "-", "*", "/", "<", "=="][..]);
        map.insert("SignedFactorPrime", &[";", "]", ")", ",", "+", "-", "*", "/", "<", "=="][..]);
        map.insert("SignedFactorZegond", &[";", "]", ")", ",", "+", "-", "*", "/", "<", "=="][..]);
        map.insert("Factor", &[";", "]", ")", ",", "+", "-", "*", "/", "<", "=="][..]);
        map.insert("VarCallPrime", &[";", "]", ")", ",", "+", "-", "*", "/", "<", "=="][..]);
        map.insert("VarPrime", &[";", "]", ")", ",", "+", "-", "*", "/", "<", "=="][..]);
        map.insert("FactorPrime", &[";", "]", ")", ",", "+", "-", "*", "/", "<", "=="][..]);
        map.insert("FactorZegond", &[";", "]", ")", ",", "+", "-", "*", "/", "<", "=="][..]);
        map.insert("Args", &[")"][..]);
        map.insert("ArgList", &[")"][..]);
        map.insert("ArgListPrime", &[")"][..]);
        map
    };
}
